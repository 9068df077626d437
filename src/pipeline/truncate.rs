// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Word-budget truncation
//!
//! Bounds aggregated content before prompt assembly. A pure prefix cut on
//! whitespace-split words, no summarization.

/// Word budget applied to aggregated content before prompting
pub const MAX_CONTENT_WORDS: usize = 500;

const CONTINUATION_MARKER: &str = "...";

/// Truncate text to at most `max_words` whitespace-separated words
///
/// Content within budget is returned unchanged. Over-budget content keeps
/// the first `max_words` words rejoined with single spaces, with a
/// continuation marker appended.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() <= max_words {
        return text.to_string();
    }

    format!("{}{}", words[..max_words].join(" "), CONTINUATION_MARKER)
}
