// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hosted chat-completion module
//!
//! Sends assembled prompts to the Groq OpenAI-compatible chat completions
//! API and returns the generated answer text.

pub mod groq;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use groq::GroqClient;
pub use provider::CompletionProvider;
pub use types::CompletionError;

/// Fallback answer when the provider responds without content
pub const NO_RESPONSE_TEXT: &str = "No response from AI model.";
