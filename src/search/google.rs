// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Custom Search JSON API provider
//!
//! Implements web search using a Google programmable search engine.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

const GOOGLE_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Google Custom Search provider
pub struct GoogleSearchProvider {
    api_key: String,
    search_engine_id: String,
    client: Client,
}

impl GoogleSearchProvider {
    /// Create a new Google Custom Search provider
    ///
    /// # Arguments
    /// * `api_key` - Google API key
    /// * `search_engine_id` - Programmable search engine identifier (cx)
    pub fn new(api_key: String, search_engine_id: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            search_engine_id,
            client,
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery {
                reason: "empty query".to_string(),
            });
        }

        let response = self
            .client
            .get(GOOGLE_API_URL)
            .query(&[
                ("q", query),
                ("key", &self.api_key),
                ("cx", &self.search_engine_id),
                ("num", &num_results.min(10).to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout { timeout_ms: 10000 }
                } else {
                    SearchError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status == 401 || status == 403 {
            return Err(SearchError::NoApiKey {
                provider: "google".to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: GoogleResponse = response.json().await.map_err(|e| SearchError::ApiError {
            status: 0,
            message: format!("JSON parse error: {}", e),
        })?;

        Ok(data
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                url: item.link,
                snippet: item.snippet.unwrap_or_default(),
                source: "google".to_string(),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "google"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty() && !self.search_engine_id.is_empty()
    }
}

#[derive(Debug, serde::Deserialize)]
struct GoogleResponse {
    // Google omits `items` entirely when a query has no results
    items: Option<Vec<GoogleItem>>,
}

#[derive(Debug, serde::Deserialize)]
struct GoogleItem {
    title: String,
    link: String,
    snippet: Option<String>,
}
