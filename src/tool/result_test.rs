// ABOUTME: Tests for ToolResult - constructors, payload shapes, defaults.
// ABOUTME: Verifies result structure works correctly.

use super::*;

#[test]
fn test_ok_result() {
    let result = ToolResult::ok(serde_json::json!({"sum": 5}));
    assert_eq!(result.payload["sum"], 5);
    assert!(!result.is_error);
    assert!(result.error_message().is_none());
}

#[test]
fn test_ok_result_from_struct() {
    #[derive(serde::Serialize)]
    struct Reading {
        location: String,
        temperature_celsius: f64,
    }

    let result = ToolResult::ok(Reading {
        location: "Paris".into(),
        temperature_celsius: 18.5,
    });
    assert_eq!(result.payload["location"], "Paris");
    assert_eq!(result.payload["temperature_celsius"], 18.5);
    assert!(!result.is_error);
}

#[test]
fn test_error_result_shape() {
    let result = ToolResult::error("Something went wrong");
    assert!(result.is_error);
    assert_eq!(result.payload["error"], "Something went wrong");
    assert_eq!(result.error_message(), Some("Something went wrong"));
}

#[test]
fn test_result_is_serializable() {
    let result = ToolResult::error("boom");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["is_error"], true);
    assert_eq!(json["payload"]["error"], "boom");
}

#[test]
fn test_default() {
    let result = ToolResult::default();
    assert!(!result.is_error);
    assert_eq!(result.payload, serde_json::json!({}));
}
