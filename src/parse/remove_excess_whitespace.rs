use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Collapses every run of two or more whitespace characters into one space.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_excess_whitespace() {
        assert_eq!(remove_excess_whitespace("Kött  Dijon \n\t med ris"), "Kött Dijon med ris");
        assert!(matches!(remove_excess_whitespace("a b"), Cow::Borrowed("a b")));
    }
}
