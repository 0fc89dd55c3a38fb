// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// `tag.class` selector; `None` if the class is not a valid CSS identifier.
pub fn class_selector(tag: &str, class: &str) -> Option<Selector> {
    Selector::parse(&format!("{tag}.{class}")).ok()
}

/// Selector from a literal known to be valid.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// All descendant text of an element, tags dropped, whitespace normalized.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
