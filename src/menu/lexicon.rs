use regex::{Regex, RegexBuilder};

use super::{DayKey, Diet};

/// Locale-specific word lists the extractor works from.
#[derive(Debug)]
pub struct Lexicon {
    /// Lowercase day names, indexed by [`DayKey::index`].
    pub days: [&'static str; 7],
    pub vegetarian: &'static [&'static str],
    pub meat: &'static [&'static str],
    /// Substrings of `class`/`id` attributes that mark a menu container.
    pub containers: &'static [&'static str],
}

pub const SWEDISH: Lexicon = Lexicon {
    days: [
        "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag",
    ],
    vegetarian: &["vegetariskt", "vegan", "vegetar", "vegofärs"],
    meat: &[
        "kött", "kyckling", "fläsk", "ägg", "fisk", "älg", "ärtsoppa", "pannkaka",
    ],
    containers: &["menu", "meny", "lunch", "dagens"],
};

impl Lexicon {
    /// Exact, case-insensitive match of a whole (trimmed) string against the day names.
    #[must_use]
    pub fn day_from_name(&self, name: &str) -> Option<DayKey> {
        let name = name.trim().to_lowercase();
        self.days
            .iter()
            .position(|day| *day == name)
            .and_then(DayKey::from_index)
    }

    /// Classifies a menu line by keyword.
    ///
    /// Vegetarian keywords are checked before meat keywords, so a line
    /// mentioning both is vegetarian. Lines matching neither are vegetarian.
    #[must_use]
    pub fn classify(&self, fragment: &str) -> Diet {
        let fragment = fragment.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|k| fragment.contains(k));
        if mentions(self.vegetarian) {
            Diet::Vegetarian
        } else if mentions(self.meat) {
            Diet::Meat
        } else {
            Diet::Vegetarian
        }
    }

    /// True if an attribute value looks like it names a menu container.
    #[must_use]
    pub fn is_container_name(&self, attr: &str) -> bool {
        let attr = attr.to_lowercase();
        self.containers.iter().any(|k| attr.contains(k))
    }

    /// Case-insensitive, word-bounded pattern matching any day name.
    #[must_use]
    pub fn day_pattern(&self) -> Regex {
        let alternatives = self
            .days
            .iter()
            .map(|day| regex::escape(day))
            .collect::<Vec<_>>()
            .join("|");
        RegexBuilder::new(&format!(r"\b(?:{alternatives})\b"))
            .case_insensitive(true)
            .build()
            .expect("regex using escaped day names should be valid")
    }
}
