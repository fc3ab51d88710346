//! Structured tool call results.

use serde::{Deserialize, Serialize};

/// A single content block in a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text content.
    Text { text: String },
}

impl Content {
    /// Create a text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text { text: text.into() }
    }
}

/// Result of a tool call: ordered content blocks plus an error flag.
///
/// The error flag is omitted from the serialized form when false, so
/// successful results only carry their content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    /// Content blocks, in presentation order.
    pub content: Vec<Content>,

    /// Whether the result reports a failure.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_error: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CallToolResult {
    /// Successful result with a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(text)],
            is_error: false,
        }
    }

    /// Error result with a single text block.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(text)],
            is_error: true,
        }
    }

    /// Append another text block.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(Content::text(text));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_result() {
        let result = CallToolResult::text("done");
        assert!(!result.is_error);
        assert_eq!(result.content, vec![Content::text("done")]);
    }

    #[test]
    fn test_error_result() {
        let result = CallToolResult::error("failed");
        assert!(result.is_error);
        assert_eq!(result.content, vec![Content::text("failed")]);
    }

    #[test]
    fn test_with_text_appends() {
        let result = CallToolResult::text("first").with_text("second");
        assert_eq!(result.content.len(), 2);
        assert_eq!(result.content[1], Content::text("second"));
    }

    #[test]
    fn test_success_serialization_omits_error_flag() {
        let result = CallToolResult::text("done");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"content":[{"type":"text","text":"done"}]}"#);
    }

    #[test]
    fn test_error_serialization() {
        let result = CallToolResult::error("failed");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""isError":true"#));
        assert!(json.contains(r#""type":"text""#));
    }

    #[test]
    fn test_deserialization_defaults_error_flag() {
        let json = r#"{"content":[{"type":"text","text":"done"}]}"#;
        let result: CallToolResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_error);
    }
}
