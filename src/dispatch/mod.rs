// ABOUTME: Dispatch module - the bounded multi-turn tool-calling loop.
// ABOUTME: Alternates between model calls and tool executions per user turn.

mod dispatcher;

pub use dispatcher::{DEFAULT_MAX_TOOL_CYCLES, Dispatcher, TurnOutcome};
