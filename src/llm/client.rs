// ABOUTME: Defines the LlmClient trait - the abstraction layer that allows
// ABOUTME: relay to work with any LLM backend.

use async_trait::async_trait;

use super::{Request, Response};
use crate::error::LlmError;

/// Trait for LLM client implementations.
///
/// The engine treats the backend as an opaque request/response service. A
/// response either designates a tool call (must execute and continue) or
/// carries final text (end of turn).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Create a message.
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError>;
}
