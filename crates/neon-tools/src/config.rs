//! Client configuration.

use std::time::Duration;

use crate::error::ToolError;

/// Default base URL of the Neon management API.
pub const DEFAULT_API_URL: &str = "https://console.neon.tech/api/v2";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Neon management API client.
#[derive(Debug, Clone)]
pub struct NeonConfig {
    /// Management API key.
    pub api_key: String,

    /// Management API base URL.
    pub api_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl NeonConfig {
    /// Create a configuration with the default API URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `NEON_API_KEY` is required; `NEON_API_URL` and `NEON_API_TIMEOUT`
    /// (seconds) fall back to defaults.
    pub fn from_env() -> Result<Self, ToolError> {
        let api_key = std::env::var("NEON_API_KEY")
            .map_err(|_| ToolError::Auth("NEON_API_KEY is not set".to_string()))?;

        let api_url =
            std::env::var("NEON_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs: u64 = std::env::var("NEON_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = NeonConfig::new("napi_test");
        assert_eq!(config.api_key, "napi_test");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
