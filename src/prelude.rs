// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use relay::prelude::*;` to get started quickly.

pub use crate::dispatch::{DEFAULT_MAX_TOOL_CYCLES, Dispatcher, TurnOutcome};
pub use crate::error::{IntentError, LlmError, RelayError, ToolError};
pub use crate::intent::IntentClassifier;
pub use crate::llm::{
    ChatSession, ContentBlock, GeminiClient, LlmClient, Message, Request, Response, Role,
    StopReason, ToolCall, ToolDefinition, Usage,
};
pub use crate::route::{Complexity, ComplexityRouter, ModelTier};
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{CalculateTool, ConvertTool, TimeTool, WeatherTool};
