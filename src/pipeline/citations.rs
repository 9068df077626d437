// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Citation rendering
//!
//! Rewrites bracketed numeric markers in a generated answer into anchor
//! elements pointing at the corresponding reference URL. The reference
//! list is read-only here; markers whose index falls outside it pass
//! through untouched.

use regex::{Captures, Regex};

/// Renderer for `[n]` citation markers
pub struct CitationRenderer {
    marker: Regex,
}

impl CitationRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self {
            marker: Regex::new(r"\[(\d+)\]").unwrap(),
        }
    }

    /// Replace in-range `[n]` markers with citation links
    ///
    /// Marker numbers are 1-based positions into `references`. Out-of-range
    /// markers (including `[0]`) are left as literal text.
    pub fn render(&self, answer: &str, references: &[String]) -> String {
        self.marker
            .replace_all(answer, |caps: &Captures| {
                let number: usize = match caps[1].parse() {
                    Ok(n) => n,
                    Err(_) => return caps[0].to_string(),
                };

                match number.checked_sub(1).and_then(|i| references.get(i)) {
                    Some(reference) => format!(
                        "<a href=\"{}\" target=\"_blank\" style=\"color: #FF1493; text-decoration: underline;\">[{}]</a>",
                        sanitize_url(reference),
                        number
                    ),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl Default for CitationRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip stray brackets, parentheses and whitespace from a URL's edges
pub fn sanitize_url(url: &str) -> String {
    url.trim_start_matches(|c: char| c.is_whitespace() || c == '(' || c == '[')
        .trim_end_matches(|c: char| c.is_whitespace() || c == ')' || c == ']')
        .to_string()
}
