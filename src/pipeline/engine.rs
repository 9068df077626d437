// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pipeline orchestration
//!
//! Runs one chat request end to end. Collaborator failures never escape:
//! search collapses to an empty link list, scraping degrades to sentinel
//! bodies, and completion failures become a fixed degraded answer.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::completion::CompletionProvider;
use crate::scrape::PageScraper;
use crate::search::SearchService;

use super::citations::CitationRenderer;
use super::classifier::{MessageClassifier, MessageKind};
use super::prompt::build_prompt;
use super::truncate::{truncate_words, MAX_CONTENT_WORDS};

/// Terminal response when nothing usable was gathered
pub const NO_CONTENT_TEXT: &str =
    "No relevant information could be extracted. Please try a different query or provide a direct link.";

/// Degraded response when the completion provider fails
pub const COMPLETION_FAILED_TEXT: &str =
    "Unable to generate a summary. Please try again later.";

/// The content-acquisition and answer-assembly pipeline
pub struct ChatPipeline {
    classifier: MessageClassifier,
    renderer: CitationRenderer,
    search: Arc<SearchService>,
    scraper: Arc<dyn PageScraper>,
    completion: Arc<dyn CompletionProvider>,
    model: String,
}

impl ChatPipeline {
    /// Create a new pipeline over the given collaborators
    pub fn new(
        search: Arc<SearchService>,
        scraper: Arc<dyn PageScraper>,
        completion: Arc<dyn CompletionProvider>,
        model: String,
    ) -> Self {
        Self {
            classifier: MessageClassifier::new(),
            renderer: CitationRenderer::new(),
            search,
            scraper,
            completion,
            model,
        }
    }

    /// Answer one chat message
    ///
    /// Always returns answer text; every failure path degrades to one of
    /// the fixed fallback strings.
    pub async fn respond(&self, message: &str) -> String {
        let (content, references) = self.gather(message).await;

        if content.trim().is_empty() {
            info!("No content gathered, returning terminal response");
            return NO_CONTENT_TEXT.to_string();
        }

        let truncated = truncate_words(&content, MAX_CONTENT_WORDS);
        let prompt = build_prompt(message, &truncated, &references);
        debug!("Assembled prompt of {} chars", prompt.len());

        match self.completion.complete(&prompt, &self.model).await {
            Ok(answer) => {
                info!(
                    "Completion returned {} chars, rendering {} references",
                    answer.len(),
                    references.len()
                );
                self.renderer.render(&answer, &references)
            }
            Err(e) => {
                warn!("Completion provider failed: {}", e);
                COMPLETION_FAILED_TEXT.to_string()
            }
        }
    }

    /// Acquire content and references for a message
    ///
    /// References are fully populated here and read-only afterwards. On the
    /// query path every search link is referenced regardless of how its
    /// individual fetch turned out.
    async fn gather(&self, message: &str) -> (String, Vec<String>) {
        match self.classifier.classify(message) {
            MessageKind::DirectUrl(url) | MessageKind::EmbeddedUrl(url) => {
                debug!("Scraping linked page: {}", url);
                let outcome = self.scraper.scrape(&url).await;
                (outcome.body_content, outcome.citations)
            }
            MessageKind::Query(query) => {
                let links = self.search.link_results(&query).await;

                if links.is_empty() {
                    debug!("No search results, falling back to raw message");
                    return (message.to_string(), Vec::new());
                }

                let mut combined = String::new();
                for link in &links {
                    let outcome = self.scraper.scrape(link).await;
                    if !combined.is_empty() {
                        combined.push(' ');
                    }
                    combined.push_str(&outcome.body_content);
                }

                (combined, links)
            }
        }
    }
}
