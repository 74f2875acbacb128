use regex::Regex;
use scraper::ElementRef;

use super::visible_text::visible_text;
use crate::menu::{Lexicon, WeeklyMenu};

/// Splits the rendered text of the whole page on day names.
pub fn text_split(root: ElementRef, lexicon: &Lexicon, day_pattern: &Regex) -> WeeklyMenu {
    split_by_day(&visible_text(root), lexicon, day_pattern)
}

/// Every line between a day name and the next one belongs to that day.
///
/// Each day name found gets an entry, even when nothing follows it. Text
/// before the first day name is ignored.
pub fn split_by_day(text: &str, lexicon: &Lexicon, day_pattern: &Regex) -> WeeklyMenu {
    let markers: Vec<_> = day_pattern.find_iter(text).collect();
    let mut weekly = WeeklyMenu::new();
    for (i, marker) in markers.iter().enumerate() {
        let Some(day) = lexicon.day_from_name(marker.as_str()) else {
            continue;
        };
        let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
        let menu = weekly.entry(day);
        for line in text[marker.end()..end].lines() {
            let Some(fragment) = clean_fragment(line) else {
                continue;
            };
            menu.push(lexicon.classify(fragment), fragment);
        }
    }
    weekly
}

/// Trims separators left over from "Måndag: ..." style lines. Lines without
/// any letter (dates, prices on their own) are dropped.
fn clean_fragment(line: &str) -> Option<&str> {
    let fragment = line
        .trim()
        .trim_start_matches([':', '-', '–', '|'])
        .trim();
    fragment
        .chars()
        .any(char::is_alphabetic)
        .then_some(fragment)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use scraper::Html;

    use super::*;
    use crate::menu::{DayKey, DayMenu, SWEDISH};

    #[test]
    fn test_split_by_day() {
        let text = "Veckans meny\nMåndag: Vegetariskt Falafel\nKyckling i curry\n\
                    tisdag\n15/1\nFisk och skaldjur\nFredag";
        let weekly = split_by_day(text, &SWEDISH, &SWEDISH.day_pattern());

        assert_eq!(weekly.day(DayKey::Monday).vegetarian, ["Vegetariskt Falafel"]);
        assert_eq!(weekly.day(DayKey::Monday).meat, ["Kyckling i curry"]);
        assert_eq!(weekly.day(DayKey::Tuesday).meat, ["Fisk och skaldjur"]);
        assert!(weekly.day(DayKey::Tuesday).vegetarian.is_empty());
        // named but empty
        assert_eq!(weekly.get(DayKey::Friday), Some(&DayMenu::default()));
        assert_eq!(weekly.len(), 3);
    }

    #[test]
    fn test_split_by_day_without_days() {
        let weekly = split_by_day("Ingen lunch idag", &SWEDISH, &SWEDISH.day_pattern());
        assert!(weekly.is_empty());
    }

    #[test]
    fn test_text_split() {
        let html = fs::read_to_string("./src/parse/html_examples/plain_text.html").unwrap();
        let document = Html::parse_document(&html);
        let weekly = text_split(document.root_element(), &SWEDISH, &SWEDISH.day_pattern());

        assert_eq!(weekly.day(DayKey::Monday).vegetarian, ["Vegansk chili sin carne"]);
        assert_eq!(weekly.day(DayKey::Tuesday).meat, ["Kött: Biff med bearnaise"]);
        assert_eq!(
            weekly.day(DayKey::Tuesday).vegetarian,
            ["Onsdagens soppa: broccoli"]
        );
        assert_eq!(
            weekly.day(DayKey::Wednesday).vegetarian,
            ["Stängt", "Pris 115 kr"]
        );
        assert!(!weekly.contains_day(DayKey::Thursday));
    }

    #[test]
    fn test_clean_fragment() {
        assert_eq!(clean_fragment("  : Soppa "), Some("Soppa"));
        assert_eq!(clean_fragment(" – Fisk"), Some("Fisk"));
        assert_eq!(clean_fragment("15/1"), None);
        assert_eq!(clean_fragment("   "), None);
    }
}
