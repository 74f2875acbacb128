mod keyword_scan;
mod remove_excess_whitespace;
pub(crate) mod static_selector;
mod structured;
mod text_split;
mod visible_text;

use std::fmt::Display;

use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::{instrument, Level};

use crate::fetch::RawDocument;
use crate::menu::{fallback_menu, Lexicon, WeeklyMenu, SWEDISH};
pub use remove_excess_whitespace::remove_excess_whitespace;

/// One way of turning a page into a [`WeeklyMenu`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    /// Site specific day headers, each followed by a text box of dishes.
    StructuredLookup,
    /// Elements whose class or id look like a menu, split on day names.
    KeywordScan,
    /// The rendered text of the whole page, split on day names.
    TextSplit,
}

impl Strategy {
    /// Priority order.
    pub const ALL: [Self; 3] = [Self::StructuredLookup, Self::KeywordScan, Self::TextSplit];
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::StructuredLookup => "structured lookup",
            Self::KeywordScan => "keyword scan",
            Self::TextSplit => "text split",
        })
    }
}

/// Runs the strategies in order and keeps the first result with any entry.
/// Falls back to the bundled menu when none has one; never fails.
#[derive(Debug, Clone)]
pub struct Extractor {
    lexicon: &'static Lexicon,
    day_pattern: Regex,
    strategies: Vec<Strategy>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&SWEDISH)
    }
}

impl Extractor {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self {
            lexicon,
            day_pattern: lexicon.day_pattern(),
            strategies: Strategy::ALL.to_vec(),
        }
    }

    /// Replaces the strategy list, keeping the given order.
    #[must_use]
    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = Strategy>) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    #[instrument(skip_all, fields(url = %document.url), level = Level::DEBUG)]
    pub fn extract(&self, document: &RawDocument) -> WeeklyMenu {
        tracing::debug!(
            "Parsing {} byte page ({}, {})",
            document.body.len(),
            document.status,
            document.content_type.as_deref().unwrap_or("no content type")
        );
        let html = Html::parse_document(&document.body);
        self.extract_html(&html)
    }

    pub fn extract_html(&self, html: &Html) -> WeeklyMenu {
        for strategy in &self.strategies {
            let weekly = self.run(*strategy, html.root_element());
            if weekly.has_entries() {
                tracing::debug!(
                    "{strategy} found {} entries over {} day(s)",
                    weekly.entry_count(),
                    weekly.len()
                );
                return weekly;
            }
            tracing::debug!("{strategy} found nothing");
        }
        tracing::warn!("No menu found on the page, using the bundled menu");
        fallback_menu()
    }

    pub fn run(&self, strategy: Strategy, root: ElementRef) -> WeeklyMenu {
        match strategy {
            Strategy::StructuredLookup => structured::structured_lookup(root, self.lexicon),
            Strategy::KeywordScan => {
                keyword_scan::keyword_scan(root, self.lexicon, &self.day_pattern)
            }
            Strategy::TextSplit => text_split::text_split(root, self.lexicon, &self.day_pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use url::Url;

    use super::*;
    use crate::menu::{DayKey, Diet};

    fn document(example: &str) -> RawDocument {
        let html = fs::read_to_string(format!("./src/parse/html_examples/{example}")).unwrap();
        let url = Url::parse("https://example.com/meny").unwrap();
        RawDocument::from_html(url, html)
    }

    fn structured_only(example: &str) -> WeeklyMenu {
        let html = Html::parse_document(&document(example).body);
        Extractor::default().run(Strategy::StructuredLookup, html.root_element())
    }

    #[test]
    fn test_extract_structured_page() {
        let doc = document("wix_week.html");
        let weekly = Extractor::default().extract(&doc);
        assert_eq!(weekly, structured_only("wix_week.html"));
        assert_eq!(weekly.day(DayKey::Friday).meat, ["Kött Piccata milanese med saffransris"]);
    }

    #[test]
    fn test_extract_falls_through_to_keyword_scan() {
        let weekly = Extractor::default().extract(&document("lunch_list.html"));
        assert_eq!(weekly.day(DayKey::Monday).meat, ["Kyckling med curry"]);
        assert_eq!(weekly.entry_count(), 5);
        // the footer is outside the menu container
        assert!(!weekly
            .iter()
            .any(|(_, menu)| menu.vegetarian.iter().any(|e| e.contains("Öppet"))));
    }

    #[test]
    fn test_extract_falls_through_to_text_split() {
        let weekly = Extractor::default().extract(&document("plain_text.html"));
        assert_eq!(weekly.day(DayKey::Monday).vegetarian, ["Vegansk chili sin carne"]);
        assert_eq!(weekly.day(DayKey::Tuesday).meat, ["Kött: Biff med bearnaise"]);
    }

    #[test]
    fn test_extract_empty_placeholders_fall_through() {
        let html = Html::parse_document(
            r#"<body><ul class="menu-days"><li>Måndag</li><li>Tisdag</li></ul></body>"#,
        );
        let extractor = Extractor::default();
        let scanned = extractor.run(Strategy::KeywordScan, html.root_element());
        assert_eq!(scanned.len(), 2);
        assert_eq!(extractor.extract_html(&html), fallback_menu());
    }

    #[test]
    fn test_extract_uses_fallback() {
        let weekly = Extractor::default().extract(&document("no_menu.html"));
        assert_eq!(weekly, fallback_menu());
    }

    #[test]
    fn test_extract_without_strategies_is_fallback() {
        for example in ["wix_week.html", "lunch_list.html", "plain_text.html"] {
            let weekly = Extractor::default()
                .with_strategies([])
                .extract(&document(example));
            assert_eq!(weekly, fallback_menu(), "{example}");
            for day in DayKey::ALL {
                assert!(weekly.contains_day(day));
            }
        }
    }

    #[test]
    fn test_strategy_order_is_respected() {
        let weekly = Extractor::default()
            .with_strategies([Strategy::TextSplit])
            .extract(&document("lunch_list.html"));
        // page text includes the footer line after Friday
        assert_eq!(
            weekly.day(DayKey::Friday).vegetarian,
            ["Välkommen! Öppet vardagar 11-14"]
        );
        assert_eq!(weekly.day(DayKey::Friday).meat, ["Pannkaka med sylt"]);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let doc = document("wix_week.html");
        let extractor = Extractor::default();
        assert_eq!(extractor.extract(&doc), extractor.extract(&doc));
        let monday = extractor.extract(&doc).day(DayKey::Monday);
        for entry in &monday.meat {
            assert_eq!(SWEDISH.classify(entry), Diet::Meat);
        }
    }
}
