// ABOUTME: Integration tests verifying modules work together.
// ABOUTME: Tests full dispatch turns without external dependencies.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use relay::prelude::*;

/// A backend stub that echoes back the advertised schema: on the first
/// call it requests the first tool with every declared parameter name set,
/// then returns a final answer.
struct SchemaEchoClient {
    calls: AtomicUsize,
}

#[async_trait]
impl LlmClient for SchemaEchoClient {
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if call == 0 {
            let def = &req.tools[0];
            let properties = def.input_schema["properties"]
                .as_object()
                .expect("object schema");

            // Request the tool using exactly the declared parameter names.
            let mut input = serde_json::Map::new();
            for (name, decl) in properties {
                let value = match decl["enum"].as_array() {
                    Some(allowed) => allowed[0].clone(),
                    None => serde_json::json!(1),
                };
                input.insert(name.clone(), value);
            }

            return Ok(Response {
                id: "resp-0".into(),
                content: vec![ContentBlock::ToolUse {
                    id: "call-0".into(),
                    name: def.name.clone(),
                    input: serde_json::Value::Object(input),
                }],
                stop_reason: StopReason::ToolUse,
                model: req.model.clone(),
                usage: Usage::default(),
            });
        }

        Ok(Response {
            id: "resp-1".into(),
            content: vec![ContentBlock::text("done")],
            stop_reason: StopReason::EndTurn,
            model: req.model.clone(),
            usage: Usage::default(),
        })
    }
}

#[tokio::test]
async fn test_advertised_schema_round_trip() {
    // A backend that only ever uses parameter names present in the
    // advertised declaration passes argument validation.
    let registry = Registry::new();
    registry.register(CalculateTool).await.unwrap();

    let client = Arc::new(SchemaEchoClient {
        calls: AtomicUsize::new(0),
    });
    let mut session = ChatSession::new(client, "stub").tools(registry.to_definitions().await);
    let dispatcher = Dispatcher::new(registry);

    let outcome = dispatcher.run_turn(&mut session, "compute").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Answer("done".into()));
}

#[tokio::test]
async fn test_full_registry_setup() {
    let registry = Registry::new();
    registry
        .register(WeatherTool::new("test-key").unwrap())
        .await
        .unwrap();
    registry.register(CalculateTool).await.unwrap();
    registry.register(TimeTool).await.unwrap();
    registry.register(ConvertTool).await.unwrap();

    assert_eq!(
        registry.list().await,
        vec!["get_weather", "calculate", "get_time", "convert_units"]
    );

    let definitions = registry.to_definitions().await;
    assert_eq!(definitions.len(), 4);
    for def in &definitions {
        assert_eq!(def.input_schema["type"], "object");
        assert!(def.input_schema["properties"].is_object());
    }
}

#[tokio::test]
async fn test_tool_definitions_for_llm() {
    let registry = Registry::new();
    registry.register(CalculateTool).await.unwrap();

    let definitions = registry.to_definitions().await;
    let def = &definitions[0];
    assert_eq!(def.name, "calculate");
    assert_eq!(
        def.input_schema["properties"]["operation"]["enum"],
        serde_json::json!(["add", "subtract", "multiply", "divide", "sqrt"])
    );
    assert_eq!(
        def.input_schema["required"],
        serde_json::json!(["operation", "a"])
    );
}

#[tokio::test]
async fn test_message_construction() {
    let user_msg = Message::user("Hello");
    let assistant_msg = Message::assistant("Hi there!");

    assert_eq!(user_msg.role, Role::User);
    assert_eq!(assistant_msg.role, Role::Assistant);
}

#[tokio::test]
async fn test_request_building() {
    let registry = Registry::new();
    registry.register(TimeTool).await.unwrap();

    let request = Request::new("gemini-2.5-flash")
        .message(Message::user("what time is it in Tokyo?"))
        .tools(registry.to_definitions().await)
        .system("You are helpful")
        .max_tokens(1024);

    assert_eq!(request.model, "gemini-2.5-flash");
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.tools.len(), 1);
    assert_eq!(request.system, Some("You are helpful".to_string()));
}
