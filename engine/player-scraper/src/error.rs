//! Error types for the scraper

use thiserror::Error;

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while fetching or extracting pages
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport failure (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP request for {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// An expected table, row or cell is absent
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A cell that must hold a number does not
    #[error("Invalid number in {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// Position label outside RB/WR/TE/QB/K/DEF
    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    /// A CSS selector failed to compile
    #[error("Invalid selector '{0}'")]
    Selector(String),
}

impl ScrapeError {
    /// Create a new missing element error
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }
}
