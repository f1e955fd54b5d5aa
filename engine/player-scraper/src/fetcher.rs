use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};

/// Source of raw HTML documents
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the document at `url`
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    /// Create a new HTTP page source
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching data from: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let html = response.text().await?;
        debug!("Successfully fetched HTML ({} bytes)", html.len());

        Ok(html)
    }
}

/// Serves documents from memory, keyed by URL
///
/// Used for offline runs against saved pages and for tests. Unknown URLs
/// answer like a missing page.
#[derive(Debug, Default, Clone)]
pub struct StaticPageSource {
    pages: HashMap<String, String>,
}

impl StaticPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document for `url`, replacing any previous one
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(url, html);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::HttpStatus { url: url.to_string(), status: 404 })
    }
}
