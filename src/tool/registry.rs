// ABOUTME: Implements the Registry - a thread-safe container that owns the
// ABOUTME: tool table and the single execution boundary for tool faults.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Tool, ToolResult};
use crate::error::ToolError;
use crate::llm::ToolDefinition;

#[derive(Default)]
struct Entries {
    tools: HashMap<String, Arc<dyn Tool>>,
    /// Registration order; listing and capability advertisement are stable.
    order: Vec<String>,
}

/// A thread-safe registry of tools.
///
/// Built once at startup and read-mostly thereafter. Duplicate names are
/// rejected (strict policy): a name identifies exactly one executable for
/// the lifetime of the process, and nothing is ever removed during a run.
#[derive(Default)]
pub struct Registry {
    entries: Arc<RwLock<Entries>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails if a tool with the same name already exists.
    pub async fn register<T: Tool + 'static>(&self, tool: T) -> Result<(), ToolError> {
        self.register_arc(Arc::new(tool)).await
    }

    /// Register a tool from an Arc.
    pub async fn register_arc(&self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let mut entries = self.entries.write().await;
        let name = tool.name().to_string();
        if entries.tools.contains_key(&name) {
            return Err(ToolError::Duplicate(name));
        }
        entries.order.push(name.clone());
        entries.tools.insert(name, tool);
        Ok(())
    }

    /// Get a tool by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let entries = self.entries.read().await;
        entries.tools.get(name).cloned()
    }

    /// List all tool names in registration order.
    pub async fn list(&self) -> Vec<String> {
        let entries = self.entries.read().await;
        entries.order.clone()
    }

    /// Get the number of registered tools.
    pub async fn count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.tools.len()
    }

    /// Convert all tools to LLM tool definitions, in registration order.
    pub async fn to_definitions(&self) -> Vec<ToolDefinition> {
        let entries = self.entries.read().await;
        entries
            .order
            .iter()
            .filter_map(|name| entries.tools.get(name))
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.schema(),
            })
            .collect()
    }

    /// Execute a tool by name.
    ///
    /// This is the single fault boundary of the tool layer: an unknown
    /// name, arguments that violate the declared schema, or an `Err` from
    /// the tool body all come back as an error-shaped [`ToolResult`], never
    /// as a raised error, so the dispatch loop can report the failure to
    /// the model and keep the conversation going.
    pub async fn execute(&self, name: &str, args: serde_json::Value) -> ToolResult {
        let tool = match self.get(name).await {
            Some(tool) => tool,
            None => {
                tracing::warn!(tool = name, "requested tool not found");
                return ToolResult::error(ToolError::NotFound(name.to_string()).to_string());
            }
        };

        if let Err(e) = validate_args(&tool.schema(), &args) {
            tracing::warn!(tool = name, error = %e, "argument validation failed");
            return ToolResult::error(e.to_string());
        }

        match tool.execute(args).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool execution failed");
                ToolResult::error(ToolError::Execution(e).to_string())
            }
        }
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

/// Validate an argument map against a declared JSON Schema object.
///
/// Best-effort structural check performed before invocation: required keys
/// present, no undeclared keys, enum membership where declared. Type
/// checking of individual values is left to the tool's own deserialization.
pub fn validate_args(schema: &serde_json::Value, args: &serde_json::Value) -> Result<(), ToolError> {
    let empty = serde_json::Map::new();
    let map = match args {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Null => &empty,
        other => {
            return Err(ToolError::InvalidArgs(format!(
                "expected an object of arguments, got {}",
                other
            )));
        }
    };

    let properties = schema["properties"].as_object().unwrap_or(&empty);

    if let Some(required) = schema["required"].as_array() {
        for key in required.iter().filter_map(|k| k.as_str()) {
            if !map.contains_key(key) {
                return Err(ToolError::InvalidArgs(format!(
                    "missing required argument '{}'",
                    key
                )));
            }
        }
    }

    for (key, value) in map {
        let declared = match properties.get(key) {
            Some(declared) => declared,
            None => {
                return Err(ToolError::InvalidArgs(format!(
                    "unknown argument '{}'",
                    key
                )));
            }
        };

        if let Some(allowed) = declared["enum"].as_array() {
            if !allowed.contains(value) {
                return Err(ToolError::InvalidArgs(format!(
                    "argument '{}' must be one of {}",
                    key,
                    serde_json::Value::Array(allowed.clone())
                )));
            }
        }
    }

    Ok(())
}
