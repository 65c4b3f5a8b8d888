// ABOUTME: ComplexityRouter - classifies a prompt as simple or complex with
// ABOUTME: a lightweight model call and picks the matching model tier.

use std::sync::Arc;

use crate::error::LlmError;
use crate::llm::{LlmClient, Message, Request};

/// Coarse complexity label for an incoming prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Complex,
}

impl Complexity {
    /// Derive a label from raw model output.
    ///
    /// The match is deliberately permissive: the substring "complex"
    /// anywhere (case-insensitive) counts as complex, anything else,
    /// including empty or rambling output, defaults to simple. Model output
    /// is not guaranteed to be a bare label.
    pub fn from_model_output(output: &str) -> Self {
        if output.to_lowercase().contains("complex") {
            Complexity::Complex
        } else {
            Complexity::Simple
        }
    }
}

/// A handle to one preconfigured model tier.
#[derive(Clone)]
pub struct ModelTier {
    pub client: Arc<dyn LlmClient>,
    pub model: String,
}

impl ModelTier {
    /// Create a tier handle for a client and model id.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Issue a single text prompt to this tier.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = Request::new(&self.model).message(Message::user(prompt));
        let response = self.client.create_message(&request).await?;
        Ok(response.text())
    }
}

/// Routes a prompt to a fast or capable model tier based on a classified
/// complexity label. Every call re-classifies; nothing is memoized.
pub struct ComplexityRouter {
    classifier: ModelTier,
    fast: ModelTier,
    capable: ModelTier,
}

impl ComplexityRouter {
    /// Create a router from a classifier tier and the two target tiers.
    pub fn new(classifier: ModelTier, fast: ModelTier, capable: ModelTier) -> Self {
        Self {
            classifier,
            fast,
            capable,
        }
    }

    /// Classify a prompt through the lightweight classifier tier.
    pub async fn classify(&self, prompt: &str) -> Result<Complexity, LlmError> {
        let instruction = format!(
            "Classify this request into one label:\n\
             - simple\n\
             - complex\n\n\
             Request: {}\n\
             Answer only the label.",
            prompt
        );

        let decision = self.classifier.generate(&instruction).await?;
        let label = Complexity::from_model_output(&decision);
        tracing::debug!(decision = %decision.trim(), ?label, "classified prompt");
        Ok(label)
    }

    /// The tier handle for a given label.
    pub fn tier(&self, label: Complexity) -> &ModelTier {
        match label {
            Complexity::Simple => &self.fast,
            Complexity::Complex => &self.capable,
        }
    }

    /// Classify the prompt and return the selected tier.
    pub async fn route(&self, prompt: &str) -> Result<&ModelTier, LlmError> {
        let label = self.classify(prompt).await?;
        Ok(self.tier(label))
    }

    /// Classify the prompt, then forward the original prompt (not the
    /// classification instruction) to the selected tier.
    pub async fn ask(&self, prompt: &str) -> Result<String, LlmError> {
        let tier = self.route(prompt).await?;
        tier.generate(prompt).await
    }
}
