// ABOUTME: Defines the Tool trait - the core abstraction for agent capabilities.
// ABOUTME: Tools have a name, description, schema, and async execute method.

use async_trait::async_trait;

use super::ToolResult;

/// A tool that can be executed on the model's request.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the LLM.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    ///
    /// Expected-failure outcomes (bad location, division by zero) are
    /// reported as `Ok(ToolResult::error(..))`; an `Err` is reserved for
    /// faults in the tool body itself. The registry converts either into
    /// an error-shaped result before it reaches the dispatch loop.
    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
