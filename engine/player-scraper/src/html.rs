//! Small helpers over the `scraper` DOM

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

/// Compile a CSS selector
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(css.to_string()))
}

/// Concatenated text of an element, untrimmed
pub(crate) fn raw_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

/// Concatenated, trimmed text of the first match of `selector` under `element`
pub(crate) fn child_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|child| raw_text(&child).trim().to_string())
}
