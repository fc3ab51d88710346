//! API credential handling.

use std::fmt;

use crate::error::ToolError;

/// Bearer token for the Neon management API.
///
/// The token value is redacted from `Debug` output.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create an API key, rejecting empty values.
    pub fn new(key: impl Into<String>) -> Result<Self, ToolError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ToolError::Auth("API key must not be empty".to_string()));
        }
        Ok(ApiKey(key))
    }

    /// Apply the key to a request as a bearer token.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(&self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ToolError::Auth(_))));
    }

    #[test]
    fn test_debug_redacts_value() {
        let key = ApiKey::new("napi_secret123").unwrap();
        let debug = format!("{:?}", key);
        assert_eq!(debug, "ApiKey(<redacted>)");
        assert!(!debug.contains("napi_secret123"));
    }
}
