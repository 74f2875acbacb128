use scraper::ElementRef;

use super::visible_text::inner_text;
use crate::menu::{DayMenu, Lexicon, WeeklyMenu};
use crate::static_selector;

// Wix repeater: each day is an <h5> rich-text header followed by a text box
// holding that day's dishes, tab separated.
static_selector!(HEADER_OR_TEXT_BOX <- "h5.font_5.wixui-rich-text__text, textarea.wixui-text-box__input");

/// Day headers paired with the next text box after them in document order.
pub fn structured_lookup(root: ElementRef, lexicon: &Lexicon) -> WeeklyMenu {
    let elements: Vec<ElementRef> = root.select(&HEADER_OR_TEXT_BOX).collect();
    let mut weekly = WeeklyMenu::new();
    for (i, element) in elements.iter().enumerate() {
        if !is_text_box(*element) {
            let Some(day) = lexicon.day_from_name(&inner_text(*element)) else {
                continue;
            };
            let Some(text_box) = elements[i + 1..].iter().find(|el| is_text_box(**el)) else {
                log::debug!("No text box after the {day} header");
                continue;
            };
            let menu = menu_from_text_box(*text_box, lexicon);
            if !menu.is_empty() {
                weekly.insert(day, menu);
            }
        }
    }
    weekly
}

fn is_text_box(element: ElementRef) -> bool {
    element.value().name() == "textarea"
}

/// Prefers the live `value` of the text box over its static content.
fn text_box_contents(text_box: ElementRef) -> String {
    match text_box.value().attr("value").map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => inner_text(text_box).trim().to_owned(),
    }
}

fn menu_from_text_box(text_box: ElementRef, lexicon: &Lexicon) -> DayMenu {
    parse_menu_text(&text_box_contents(text_box), lexicon)
}

/// Splits text box contents into lines, then tab separated parts.
pub fn parse_menu_text(text: &str, lexicon: &Lexicon) -> DayMenu {
    let mut menu = DayMenu::default();
    for part in text.lines().flat_map(|line| line.split('\t')) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        menu.push(lexicon.classify(part), part);
    }
    menu
}
