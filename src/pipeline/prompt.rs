// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt assembly
//!
//! One fixed instruction template with three substitution points: the
//! original user message, the truncated content, and the numbered
//! reference list.

use super::citations::sanitize_url;

/// Build the completion prompt
pub fn build_prompt(message: &str, content: &str, references: &[String]) -> String {
    format!(
        "Summarize the following text in detail with inline citations linked directly to the provided references:\n\
         User Input: \"{message}\"\n\
         Scraped Content: \"{content}\"\n\
         \n\
         References:\n\
         {references}\n\
         \n\
         Note:\n\
         - Use inline citations like [1], [2], etc., directly referencing the provided URLs.\n\
         - Do not invent references or citations.\n\
         - Ensure citations correspond to actual scraped content.\n\
         - Do not include raw URLs in the answer body.\n",
        message = message,
        content = content,
        references = format_references(references),
    )
}

/// Render the reference list as numbered lines, one URL per line
fn format_references(references: &[String]) -> String {
    references
        .iter()
        .enumerate()
        .map(|(index, reference)| format!("[{}] {}", index + 1, sanitize_url(reference)))
        .collect::<Vec<_>>()
        .join("\n")
}
