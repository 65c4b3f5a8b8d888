// ABOUTME: Defines the ToolResult type - a unified structure for tool
// ABOUTME: execution outcomes with a structured payload and error state.

use serde::Serialize;

/// Result of a tool execution.
///
/// The payload is always serializable JSON: a success carries whatever
/// structured mapping the tool produced, an error carries
/// `{"error": message}`. Either way the result is fed back to the model as
/// data; no exception value ever crosses this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    /// The structured output payload.
    pub payload: serde_json::Value,

    /// Whether this result represents an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result from any serializable payload.
    pub fn ok(payload: impl Serialize) -> Self {
        match serde_json::to_value(payload) {
            Ok(payload) => Self {
                payload,
                is_error: false,
            },
            Err(e) => Self::error(format!("Unserializable tool output: {}", e)),
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            payload: serde_json::json!({ "error": message.into() }),
            is_error: true,
        }
    }

    /// The error message, if this is an error result.
    pub fn error_message(&self) -> Option<&str> {
        if self.is_error {
            self.payload["error"].as_str()
        } else {
            None
        }
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(serde_json::json!({}))
    }
}
