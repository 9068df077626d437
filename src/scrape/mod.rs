// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page content acquisition
//!
//! Fetches web pages and extracts visible text from heading and paragraph
//! elements. Retrieval failures never surface as errors: they degrade to
//! fixed sentinel strings the pipeline carries downstream.

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::FetchConfig;
pub use extractor::extract_page_text;
pub use fetcher::{ContentFetcher, PageScraper, ScrapeOutcome, LOW_CONTENT_TEXT, SCRAPE_FAILURE_TEXT};
