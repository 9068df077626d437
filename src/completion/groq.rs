// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Groq chat completions provider
//!
//! Calls Groq's OpenAI-compatible `/openai/v1/chat/completions` endpoint
//! with a single system-role message carrying the assembled prompt.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::provider::CompletionProvider;
use super::types::CompletionError;
use super::NO_RESPONSE_TEXT;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Groq chat completions client
pub struct GroqClient {
    api_key: String,
    client: Client,
}

impl GroqClient {
    /// Create a new Groq client
    ///
    /// # Arguments
    /// * `api_key` - Groq API key
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        timeout_ms: REQUEST_TIMEOUT_SECS * 1000,
                    }
                } else {
                    CompletionError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status == 401 || status == 403 {
            return Err(CompletionError::NoApiKey {
                provider: "groq".to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            debug!("Completion response arrived without content");
            return Ok(NO_RESPONSE_TEXT.to_string());
        }

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "groq"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
