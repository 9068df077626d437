// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for chat completions

use thiserror::Error;

/// Errors that can occur during completion requests
#[derive(Debug, Error)]
pub enum CompletionError {
    /// API error from the completion provider
    #[error("Completion API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Completion request timed out
    #[error("Completion timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// No API key configured for the provider
    #[error("No API key configured for {provider}")]
    NoApiKey {
        /// Name of the provider missing API key
        provider: String,
    },

    /// Response body could not be interpreted
    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),
}
