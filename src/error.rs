// ABOUTME: Defines all error types for the relay library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under RelayError.

/// Top-level error type for the relay library.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Intent error: {0}")]
    Intent(#[from] IntentError),
}

/// Errors from LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors from tool operations.
///
/// Only `Duplicate` ever escapes the tool layer as a raised error. The
/// other variants exist so the registry can name what went wrong while
/// converting the fault into an error-shaped `ToolResult` at its boundary,
/// keeping the conversation alive.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool already registered: {0}")]
    Duplicate(String),

    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

/// Errors from intent classification.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("Allowed label set must not be empty")]
    EmptyLabelSet,

    #[error("Malformed classification response: {0}")]
    Malformed(String),

    #[error("Label '{0}' is not in the allowed set")]
    UnknownLabel(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}
