use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector parsed on first use.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    cell: OnceLock<Selector>,
    selector: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(selector: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            selector,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.cell
            .get_or_init(|| match Selector::parse(self.selector) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.selector, e),
            })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
