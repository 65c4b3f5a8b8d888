// ABOUTME: Dispatcher - executes the bounded ask-model/run-tool loop for
// ABOUTME: one user turn and classifies how the turn ended.

use crate::error::LlmError;
use crate::llm::{ChatSession, ContentBlock, Message};
use crate::tool::Registry;

/// Default number of tool cycles allowed per user turn.
pub const DEFAULT_MAX_TOOL_CYCLES: usize = 5;

/// How a dispatched turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The model produced a final natural-language answer.
    Answer(String),

    /// The tool-cycle budget was exhausted before the model stopped
    /// requesting tools. Surfaced as a warning; there is no model-authored
    /// answer for this turn.
    CycleLimit { cycles: usize },
}

/// Drives one user turn against a [`ChatSession`], alternating between
/// model calls and tool executions until the model stops requesting tools
/// or the cycle budget runs out.
///
/// Tool faults never abort the loop; they are fed back to the model as
/// error-shaped results so it can retry, switch strategy, or apologize.
/// Backend faults and an exhausted cycle budget both abort the turn and
/// roll the session history back to the pre-turn checkpoint, so the
/// session is always left in a state the backend accepts.
pub struct Dispatcher {
    registry: Registry,
    max_tool_cycles: usize,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry with the default bound.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            max_tool_cycles: DEFAULT_MAX_TOOL_CYCLES,
        }
    }

    /// Set the maximum number of tool cycles per turn.
    pub fn max_tool_cycles(mut self, max: usize) -> Self {
        self.max_tool_cycles = max;
        self
    }

    /// The registry this dispatcher executes tools from.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve one user prompt.
    pub async fn run_turn(
        &self,
        session: &mut ChatSession,
        prompt: &str,
    ) -> Result<TurnOutcome, LlmError> {
        let checkpoint = session.len();

        let mut response = match session.send(Message::user(prompt)).await {
            Ok(response) => response,
            Err(e) => {
                session.truncate(checkpoint);
                return Err(e);
            }
        };

        let mut cycles = 0;

        while let Some(call) = response.first_tool_use() {
            if cycles >= self.max_tool_cycles {
                tracing::warn!(
                    cycles,
                    tool = call.name,
                    "tool cycle budget exhausted, ending turn without an answer"
                );
                // Discard the turn's messages: the history would otherwise
                // end with an unanswered tool call, which the backend
                // rejects on every subsequent request.
                session.truncate(checkpoint);
                return Ok(TurnOutcome::CycleLimit { cycles });
            }

            if response.tool_use_count() > 1 {
                // Policy: one tool call per response; extras are dropped.
                tracing::warn!(
                    count = response.tool_use_count(),
                    "response carries multiple tool calls, honoring only the first"
                );
            }

            cycles += 1;
            let id = call.id.to_string();
            let name = call.name.to_string();
            let input = call.input.clone();

            let result = self.registry.execute(&name, input.clone()).await;
            tracing::info!(
                cycle = cycles,
                tool = %name,
                args = %input,
                is_error = result.is_error,
                "tool cycle"
            );

            let block = if result.is_error {
                ContentBlock::tool_error(&id, &name, result.payload)
            } else {
                ContentBlock::tool_result(&id, &name, result.payload)
            };

            response = match session.send(Message::tool_results(vec![block])).await {
                Ok(response) => response,
                Err(e) => {
                    session.truncate(checkpoint);
                    return Err(e);
                }
            };
        }

        Ok(TurnOutcome::Answer(response.text()))
    }
}
