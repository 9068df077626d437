// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Startup configuration for the chat node
//!
//! All environment-derived configuration is resolved here, once, at process
//! start. Required keys fail fast with a descriptive error instead of being
//! checked ad hoc at call sites.

use std::env;
use thiserror::Error;

/// Errors raised while loading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty
    #[error("Missing required environment variable: {0}")]
    MissingKey(&'static str),

    /// A configuration value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration for the chat node
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP API listens on
    pub api_port: u16,
    /// Google Custom Search API key (required)
    pub google_api_key: String,
    /// Google Custom Search engine identifier (required)
    pub google_search_engine_id: String,
    /// Groq API key for chat completions (required)
    pub groq_api_key: String,
    /// Model identifier sent to the completion provider
    pub completion_model: String,
    /// Requests allowed per minute at the routing boundary
    pub rate_limit_per_minute: u32,
    /// Maximum search result links to fetch per query
    pub max_search_results: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Fails if any required key is absent so the process exits at startup
    /// rather than on the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            google_api_key: require_env("GOOGLE_API_KEY")?,
            google_search_engine_id: require_env("GOOGLE_SEARCH_ENGINE_ID")?,
            groq_api_key: require_env("GROQ_API_KEY")?,
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "llama3-8b-8192".to_string()),
            rate_limit_per_minute: env::var("RATE_LIMIT_PER_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_search_results: env::var("MAX_SEARCH_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate tunable values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rate_limit_per_minute == 0 {
            return Err(ConfigError::Invalid(
                "RATE_LIMIT_PER_MINUTE must be greater than 0".to_string(),
            ));
        }
        if self.max_search_results == 0 || self.max_search_results > 10 {
            return Err(ConfigError::Invalid(
                "MAX_SEARCH_RESULTS must be between 1 and 10".to_string(),
            ));
        }
        Ok(())
    }
}

fn require_env(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingKey(key)),
    }
}
