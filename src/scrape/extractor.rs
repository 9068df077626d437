//! HTML content extraction
//!
//! Pulls visible text from heading and paragraph elements only. Navigation,
//! sidebars, scripts and every other page element are ignored.

use scraper::{Html, Selector};

/// Extract visible text from `h1`, `h2` and `p` elements
///
/// Each element's text is trimmed; non-empty fragments are joined with a
/// single space in document order.
///
/// # Arguments
/// * `html` - Raw HTML string
///
/// # Returns
/// Extracted text content, possibly empty
pub fn extract_page_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("h1, h2, p") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let fragments: Vec<String> = document
        .select(&selector)
        .map(|element| {
            element
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect();

    fragments.join(" ")
}
