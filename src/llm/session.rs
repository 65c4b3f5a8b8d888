// ABOUTME: ChatSession - the model-backend session handle that owns
// ABOUTME: conversation history, advertised tools, model id, and system prompt.

use std::sync::Arc;

use super::{LlmClient, Message, Request, Response, Role, ToolDefinition};
use crate::error::LlmError;

/// A stateful conversation handle over an [`LlmClient`].
///
/// The session is the single owner of conversation history; the dispatch
/// loop never keeps its own copy. Each `send` appends the outgoing message,
/// issues the request, and appends the assistant reply. A failed backend
/// call leaves the outgoing message off the history so the session stays
/// consistent for the next prompt.
pub struct ChatSession {
    client: Arc<dyn LlmClient>,
    model: String,
    system: Option<String>,
    tools: Vec<ToolDefinition>,
    max_tokens: Option<u32>,
    messages: Vec<Message>,
}

impl ChatSession {
    /// Create a new session for the given client and model.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            system: None,
            tools: Vec::new(),
            max_tokens: None,
            messages: Vec::new(),
        }
    }

    /// Set the system prompt.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Advertise tool declarations to the backend for every request.
    pub fn tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Set max tokens per response.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Number of messages currently in the history.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Roll the history back to `len` messages. Used by the dispatch loop
    /// to discard a partially completed turn after a backend failure.
    pub fn truncate(&mut self, len: usize) {
        self.messages.truncate(len);
    }

    /// Send a message and return the model's response.
    pub async fn send(&mut self, message: Message) -> Result<Response, LlmError> {
        self.messages.push(message);

        let mut request = Request::new(&self.model)
            .messages(self.messages.clone())
            .tools(self.tools.clone());
        if let Some(system) = &self.system {
            request = request.system(system);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.max_tokens(max_tokens);
        }

        match self.client.create_message(&request).await {
            Ok(response) => {
                self.messages.push(Message {
                    role: Role::Assistant,
                    content: response.content.clone(),
                });
                Ok(response)
            }
            Err(e) => {
                self.messages.pop();
                Err(e)
            }
        }
    }
}
