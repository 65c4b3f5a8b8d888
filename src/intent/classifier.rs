// ABOUTME: IntentClassifier - constrains the model to a caller-supplied
// ABOUTME: label set via structured JSON output and validates the reply.

use std::sync::Arc;

use serde::Deserialize;

use crate::error::IntentError;
use crate::llm::{LlmClient, Message, Request};

#[derive(Debug, Deserialize)]
struct IntentEnvelope {
    intent: String,
}

/// Classifies free-form user input into one member of a caller-supplied
/// closed label set.
///
/// The allowed set is evaluated per call; nothing is staged into a shared
/// schema and no past classifications are kept.
pub struct IntentClassifier {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl IntentClassifier {
    /// Create a classifier over the given client and model.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build the one-shot validation contract restricting `intent` to the
    /// allowed labels.
    fn contract(allowed: &[String]) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "intent": {
                    "type": "string",
                    "enum": allowed,
                }
            },
            "required": ["intent"]
        })
    }

    /// Classify `user_input` into one of `allowed_labels`.
    ///
    /// A non-JSON reply, a reply without an `intent` field, or a label
    /// outside the allowed set is an error surfaced to the caller; it is
    /// never silently coerced to a default label.
    pub async fn classify(
        &self,
        user_input: &str,
        allowed_labels: &[String],
    ) -> Result<String, IntentError> {
        if allowed_labels.is_empty() {
            return Err(IntentError::EmptyLabelSet);
        }

        let label_list = allowed_labels.join("\n- ");
        let prompt = format!(
            "Classify the user intent into one of:\n- {}\n\n\
             Return ONLY valid JSON:\n{{\"intent\": \"<one_of_the_above>\"}}\n\n\
             User: {}",
            label_list, user_input
        );

        let request = Request::new(&self.model)
            .message(Message::user(prompt))
            .response_schema(Self::contract(allowed_labels));

        let response = self.client.create_message(&request).await?;
        let text = response.text();

        let envelope: IntentEnvelope = serde_json::from_str(text.trim())
            .map_err(|e| IntentError::Malformed(format!("{} in response '{}'", e, text.trim())))?;

        if !allowed_labels.contains(&envelope.intent) {
            return Err(IntentError::UnknownLabel(envelope.intent));
        }

        tracing::debug!(intent = %envelope.intent, "classified intent");
        Ok(envelope.intent)
    }
}
