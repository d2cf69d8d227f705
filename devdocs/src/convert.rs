//! HTML to Markdown conversion.
//!
//! Navigational chrome (nav bars, sidebars, menus) is stripped before
//! conversion so the output is just the reference content.

use scraper::{Html, Selector};

use crate::config::CHROME_SELECTOR;

/// Convert an HTML document to Markdown, dropping known chrome elements.
pub fn html_to_markdown(html: &str) -> String {
    let mut document = Html::parse_document(html);

    // The selector is a constant; a parse failure just skips stripping.
    if let Ok(selector) = Selector::parse(CHROME_SELECTOR) {
        let chrome: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
        for id in chrome {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }

    html2md::parse_html(&document.root_element().html())
}
