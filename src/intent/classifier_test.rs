// ABOUTME: Tests for the IntentClassifier - JSON validation, label-set
// ABOUTME: membership, and the per-call contract sent to the backend.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::*;
use crate::error::IntentError;
use crate::llm::{ContentBlock, LlmClient, Request, Response, StopReason, Usage};

/// Replies with canned text; records the request for inspection.
struct CannedClient {
    reply: String,
    requests: Mutex<Vec<Request>>,
}

impl CannedClient {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LlmClient for CannedClient {
    async fn create_message(&self, req: &Request) -> Result<Response, crate::error::LlmError> {
        self.requests.lock().await.push(req.clone());
        Ok(Response {
            id: "resp".into(),
            content: vec![ContentBlock::text(&self.reply)],
            stop_reason: StopReason::EndTurn,
            model: req.model.clone(),
            usage: Usage::default(),
        })
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_classify_accepts_in_set_label() {
    let client = CannedClient::new(r#"{"intent": "order_food"}"#);
    let classifier = IntentClassifier::new(client, "stub-flash");

    let intent = classifier
        .classify(
            "I want to order pizza tonight",
            &labels(&["book_flight", "order_food"]),
        )
        .await
        .unwrap();
    assert_eq!(intent, "order_food");
}

#[tokio::test]
async fn test_classify_rejects_out_of_set_label() {
    let client = CannedClient::new(r#"{"intent": "cancel_flight"}"#);
    let classifier = IntentClassifier::new(client, "stub-flash");

    let err = classifier
        .classify("cancel my booking", &labels(&["book_flight", "order_food"]))
        .await
        .unwrap_err();
    assert!(matches!(err, IntentError::UnknownLabel(label) if label == "cancel_flight"));
}

#[tokio::test]
async fn test_classify_rejects_non_json() {
    let client = CannedClient::new("the intent is order_food");
    let classifier = IntentClassifier::new(client, "stub-flash");

    let err = classifier
        .classify("order pizza", &labels(&["order_food"]))
        .await
        .unwrap_err();
    assert!(matches!(err, IntentError::Malformed(_)));
}

#[tokio::test]
async fn test_classify_rejects_wrong_shape() {
    let client = CannedClient::new(r#"{"label": "order_food"}"#);
    let classifier = IntentClassifier::new(client, "stub-flash");

    let err = classifier
        .classify("order pizza", &labels(&["order_food"]))
        .await
        .unwrap_err();
    assert!(matches!(err, IntentError::Malformed(_)));
}

#[tokio::test]
async fn test_empty_label_set_rejected_without_model_call() {
    let client = CannedClient::new(r#"{"intent": "anything"}"#);
    let classifier = IntentClassifier::new(client.clone(), "stub-flash");

    let err = classifier.classify("hello", &[]).await.unwrap_err();
    assert!(matches!(err, IntentError::EmptyLabelSet));
    assert!(client.requests.lock().await.is_empty());
}

#[tokio::test]
async fn test_contract_is_per_call_and_lists_labels() {
    let client = CannedClient::new(r#"{"intent": "check_weather"}"#);
    let classifier = IntentClassifier::new(client.clone(), "stub-flash");

    classifier
        .classify("will it rain?", &labels(&["check_weather", "unknown"]))
        .await
        .unwrap();

    let requests = client.requests.lock().await;
    let schema = requests[0].response_schema.as_ref().expect("schema");
    assert_eq!(
        schema["properties"]["intent"]["enum"],
        serde_json::json!(["check_weather", "unknown"])
    );
    assert_eq!(schema["required"], serde_json::json!(["intent"]));
}

#[tokio::test]
async fn test_whitespace_around_json_is_tolerated() {
    let client = CannedClient::new("\n  {\"intent\": \"order_food\"}  \n");
    let classifier = IntentClassifier::new(client, "stub-flash");

    let intent = classifier
        .classify("pizza", &labels(&["order_food"]))
        .await
        .unwrap();
    assert_eq!(intent, "order_food");
}
