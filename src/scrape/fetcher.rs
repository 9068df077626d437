//! HTTP page fetching with sentinel degradation
//!
//! The fetcher never returns an error to the pipeline. Every failure mode
//! maps to a fixed sentinel body with no citation, so aggregation can treat
//! all outcomes uniformly.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::config::FetchConfig;
use super::extractor::extract_page_text;

/// Sentinel body for retrieval or parse failures
pub const SCRAPE_FAILURE_TEXT: &str = "Error occurred during scraping.";

/// Sentinel body for pages whose extracted text is too short to cite
pub const LOW_CONTENT_TEXT: &str = "Content is not useful or empty.";

/// Extracted text at or below this length is treated as no content
const MIN_USEFUL_CHARS: usize = 20;

/// Outcome of scraping one URL
///
/// `citations` is either empty (failure or low content) or the single
/// source URL that produced `body_content`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeOutcome {
    pub body_content: String,
    pub citations: Vec<String>,
}

impl ScrapeOutcome {
    fn failure() -> Self {
        Self {
            body_content: SCRAPE_FAILURE_TEXT.to_string(),
            citations: Vec::new(),
        }
    }

    fn low_content() -> Self {
        Self {
            body_content: LOW_CONTENT_TEXT.to_string(),
            citations: Vec::new(),
        }
    }
}

/// Trait for page scraping so the pipeline can be exercised without network
#[async_trait]
pub trait PageScraper: Send + Sync {
    /// Scrape one URL; infallible by contract, degrading to sentinels
    async fn scrape(&self, url: &str) -> ScrapeOutcome;
}

/// HTTP content fetcher
pub struct ContentFetcher {
    client: Client,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Check that a URL parses and uses an http(s) scheme
    fn is_fetchable_url(url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => ["http", "https"].contains(&parsed.scheme()),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl PageScraper for ContentFetcher {
    async fn scrape(&self, url: &str) -> ScrapeOutcome {
        if !Self::is_fetchable_url(url) {
            warn!("Refusing to fetch malformed URL: {}", url);
            return ScrapeOutcome::failure();
        }

        debug!("Fetching content from: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                return ScrapeOutcome::failure();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} fetching {}", status.as_u16(), url);
            return ScrapeOutcome::failure();
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                warn!("Error reading body from {}: {}", url, e);
                return ScrapeOutcome::failure();
            }
        };

        let text = extract_page_text(&html);

        if text.len() <= MIN_USEFUL_CHARS {
            debug!("Extracted only {} chars from {}", text.len(), url);
            return ScrapeOutcome::low_content();
        }

        debug!("Extracted {} chars from {}", text.len(), url);

        ScrapeOutcome {
            body_content: text,
            citations: vec![url.to_string()],
        }
    }
}
