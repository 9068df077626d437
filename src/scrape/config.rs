//! Configuration for page fetching

use std::env;

/// Configuration for page fetching
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout per page fetch in seconds (default: 10)
    pub timeout_secs: u64,
    /// Maximum redirects to follow (default: 5)
    pub max_redirects: usize,
    /// User agent presented to fetched sites
    pub user_agent: String,
}

impl FetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_redirects: env::var("FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            user_agent: env::var("FETCH_USER_AGENT").unwrap_or_else(|_| "Mozilla/5.0".to_string()),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_redirects: 5,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_redirects, 5);
        assert_eq!(config.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_fetch_config_from_env_does_not_panic() {
        let config = FetchConfig::from_env();
        assert!(config.timeout_secs > 0);
    }
}
