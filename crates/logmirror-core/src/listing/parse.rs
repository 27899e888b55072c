//! Anchor extraction from listing HTML.

use scraper::{ElementRef, Html};

use crate::sources::SuffixFilter;

/// Returns the `href` of every anchor in `html` accepted by `filter`, in
/// document order. Anchors without an `href` are ignored.
pub fn extract_links(html: &str, filter: &SuffixFilter) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| filter.accepts(href))
        .map(str::to_string)
        .collect()
}
