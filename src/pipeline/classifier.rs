// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Message classification
//!
//! Decides whether a chat message is itself a URL, carries an embedded URL,
//! or is a free-text search query.

use regex::Regex;

/// How a user message should be routed through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum MessageKind {
    /// The entire trimmed message is a URL
    DirectUrl(String),
    /// A URL appears somewhere inside the message (first match)
    EmbeddedUrl(String),
    /// Free text to hand to the search provider
    Query(String),
}

/// Classifier for incoming chat messages
pub struct MessageClassifier {
    full_url: Regex,
    embedded_url: Regex,
}

impl MessageClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self {
            full_url: Regex::new(r"^https?://\S+$").unwrap(),
            embedded_url: Regex::new(r"https?://\S+").unwrap(),
        }
    }

    /// Classify a message
    ///
    /// The whole-message check runs before the substring search. No
    /// normalization is applied beyond trimming.
    pub fn classify(&self, message: &str) -> MessageKind {
        let trimmed = message.trim();

        if self.full_url.is_match(trimmed) {
            return MessageKind::DirectUrl(trimmed.to_string());
        }

        if let Some(found) = self.embedded_url.find(message) {
            return MessageKind::EmbeddedUrl(found.as_str().to_string());
        }

        MessageKind::Query(message.to_string())
    }
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::new()
    }
}
