// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search service orchestration
//!
//! Wraps the configured provider and absorbs its failures. Callers receive
//! an ordered list of result links; an empty list means "no results" or
//! "provider failed" and the two are deliberately indistinguishable.

use tracing::{debug, warn};

use super::google::GoogleSearchProvider;
use super::provider::SearchProvider;

/// Search service that shields the pipeline from provider errors
pub struct SearchService {
    provider: Box<dyn SearchProvider>,
    max_results: usize,
}

impl SearchService {
    /// Create a search service backed by Google Custom Search
    pub fn new(api_key: String, search_engine_id: String, max_results: usize) -> Self {
        Self {
            provider: Box::new(GoogleSearchProvider::new(api_key, search_engine_id)),
            max_results,
        }
    }

    /// Create a search service with an explicit provider
    pub fn with_provider(provider: Box<dyn SearchProvider>, max_results: usize) -> Self {
        Self {
            provider,
            max_results,
        }
    }

    /// Search and return result links in rank order
    ///
    /// Provider errors are logged and collapsed into an empty list so the
    /// caller treats them exactly like "no results".
    pub async fn link_results(&self, query: &str) -> Vec<String> {
        if !self.provider.is_available() {
            warn!("Search provider {} is not available", self.provider.name());
            return Vec::new();
        }

        match self.provider.search(query, self.max_results).await {
            Ok(results) => {
                debug!(
                    "Search returned {} results from {} for query: {}",
                    results.len(),
                    self.provider.name(),
                    query
                );
                results.into_iter().map(|r| r.url).collect()
            }
            Err(e) => {
                warn!("Search provider {} failed: {}", self.provider.name(), e);
                Vec::new()
            }
        }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
