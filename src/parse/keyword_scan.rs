use regex::Regex;
use scraper::ElementRef;

use super::{text_split::split_by_day, visible_text::visible_text};
use crate::menu::{Lexicon, WeeklyMenu};
use crate::static_selector;

static_selector!(CONTAINER_SELECTOR <- "div, section, article, ul, ol, table");

/// Containers whose `class` or `id` names them as a menu, split on day names.
///
/// Containers nested in an already matched container are skipped so their
/// text is not counted twice.
pub fn keyword_scan(root: ElementRef, lexicon: &Lexicon, day_pattern: &Regex) -> WeeklyMenu {
    let mut matched: Vec<ElementRef> = Vec::new();
    let mut weekly = WeeklyMenu::new();
    for container in root.select(&CONTAINER_SELECTOR) {
        if !is_menu_container(container, lexicon) {
            continue;
        }
        if container
            .ancestors()
            .any(|ancestor| matched.iter().any(|m| **m == ancestor))
        {
            continue;
        }
        matched.push(container);
        let found = split_by_day(&visible_text(container), lexicon, day_pattern);
        log::trace!(
            "Menu container <{}> names {} day(s)",
            container.value().name(),
            found.len()
        );
        weekly.merge(found);
    }
    weekly
}

fn is_menu_container(element: ElementRef, lexicon: &Lexicon) -> bool {
    let element = element.value();
    element
        .attr("class")
        .into_iter()
        .chain(element.attr("id"))
        .any(|attr| lexicon.is_container_name(attr))
}
