use scraper::ElementRef;

use super::remove_excess_whitespace;

/// Elements whose text never renders.
const HIDDEN: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Elements that start a new line when rendered.
const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td",
    "textarea", "tfoot", "th", "thead", "tr", "ul",
];

/// Rendered text of `element`, one non-empty line per block, whitespace collapsed.
pub fn visible_text(element: ElementRef) -> String {
    let mut raw = String::new();
    collect(element, &mut raw);
    raw.lines()
        .map(|line| remove_excess_whitespace(line.trim()).into_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if HIDDEN.contains(&name) {
                continue;
            }
            let block = BLOCKS.contains(&name);
            if block {
                out.push('\n');
            }
            collect(child, out);
            if block {
                out.push('\n');
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

/// All text nodes of `element` concatenated, as written in the markup.
pub fn inner_text(element: ElementRef) -> String {
    element.text().collect()
}
