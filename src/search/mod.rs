// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search module
//!
//! Turns free-text chat messages into ordered lists of candidate links via
//! the Google Custom Search JSON API. Provider failures are swallowed at the
//! service boundary: callers see an empty result list, never an error.

pub mod google;
pub mod provider;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use google::GoogleSearchProvider;
pub use provider::SearchProvider;
pub use service::SearchService;
pub use types::{SearchError, SearchResult};
