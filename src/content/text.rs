//! HTML fragment to plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

/// Elements whose subtrees never contribute readable text.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "iframe", "svg", "template"];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Convert an HTML fragment into clean, single-line plain text.
///
/// Non-content elements (scripts, styles, frames, inline SVG) are dropped,
/// character entities are decoded by the parser, and every whitespace run
/// (including non-breaking spaces) collapses to one space. The parser is
/// error-recovering, so malformed markup still yields its best-effort text
/// rather than an error.
///
/// # Examples
///
/// ```
/// use awful_feed_news::content::text::normalize;
///
/// assert_eq!(normalize("<p>Hello <b>World</b>&nbsp;!</p>"), "Hello World !");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    // Plain text has nothing to parse; skipping the parser keeps a second
    // pass over our own output stable.
    if !html.contains('<') && !html.contains('&') {
        return collapse_whitespace(html);
    }

    let fragment = Html::parse_fragment(html);
    let mut text = String::with_capacity(html.len());
    push_text(fragment.root_element(), &mut text);
    collapse_whitespace(&text)
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            if !NON_CONTENT_TAGS.contains(&child.value().name()) {
                push_text(child, out);
            }
        }
    }
}
