//! Tool execution error types.

use thiserror::Error;

/// Errors that abort a tool call.
///
/// Expected domain outcomes (missing default branch, integration conflict,
/// rejected creation status) are not represented here; tools report those
/// through [`CallToolResult`](crate::result::CallToolResult).
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Tool invoked with malformed parameters.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The management API rejected a request.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Authentication error.
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl From<reqwest::Error> for ToolError {
    fn from(e: reqwest::Error) -> Self {
        ToolError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::Json(e.to_string())
    }
}
