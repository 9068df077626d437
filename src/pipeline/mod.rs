// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Answer assembly pipeline
//!
//! A strictly linear, per-request flow:
//!
//! ```text
//! message → classify → {direct fetch | search + fetch each | raw message}
//!         → aggregate → truncate → prompt → completion → citation links
//! ```
//!
//! One conditional fan-out (the classifier's three variants), one early
//! exit (empty aggregated content). Nothing here retries and nothing here
//! survives the request.

pub mod citations;
pub mod classifier;
pub mod engine;
pub mod prompt;
pub mod truncate;

// Re-export commonly used types
pub use citations::{sanitize_url, CitationRenderer};
pub use classifier::{MessageClassifier, MessageKind};
pub use engine::{ChatPipeline, COMPLETION_FAILED_TEXT, NO_CONTENT_TEXT};
pub use prompt::build_prompt;
pub use truncate::{truncate_words, MAX_CONTENT_WORDS};
