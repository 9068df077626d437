// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /api/chat
///
/// `message` is kept as a raw JSON value so that a missing field and a
/// non-string field both reach `validate` and produce the same 400 body
/// instead of a deserializer rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatApiRequest {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ChatApiRequest {
    /// Validate the request, returning the message text
    pub fn validate(&self) -> Result<&str, String> {
        match &self.message {
            Some(serde_json::Value::String(message)) if !message.is_empty() => Ok(message),
            _ => Err("Invalid input. Please provide a valid query message.".to_string()),
        }
    }
}
