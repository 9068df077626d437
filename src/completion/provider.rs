// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Completion provider trait definition

use async_trait::async_trait;

use super::types::CompletionError;

/// Trait for implementing hosted completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate an answer for an assembled prompt
    ///
    /// # Arguments
    /// * `prompt` - The full instruction text
    /// * `model` - Model identifier understood by the provider
    ///
    /// # Returns
    /// The generated answer text, or an error. Implementations substitute a
    /// fixed fallback for responses that arrive without content, so an `Ok`
    /// value is never empty.
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, CompletionError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider is available (has API key, etc.)
    fn is_available(&self) -> bool;
}
