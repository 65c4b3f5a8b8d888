// ABOUTME: CalculateTool - basic arithmetic over a closed operation enum.
// ABOUTME: Division by zero and negative square roots are explicit errors.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Supported arithmetic operations. The closed enum makes the dispatch
/// exhaustive; an undeclared operation never reaches `execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
}

#[derive(Debug, Deserialize)]
struct Args {
    operation: Operation,
    a: f64,
    /// Second operand; unused by sqrt.
    b: Option<f64>,
}

/// Tool for basic arithmetic.
pub struct CalculateTool;

impl CalculateTool {
    fn apply(args: &Args) -> Result<f64, String> {
        let b = || {
            args.b
                .ok_or_else(|| format!("operation '{:?}' requires operand 'b'", args.operation))
        };

        match args.operation {
            Operation::Add => Ok(args.a + b()?),
            Operation::Subtract => Ok(args.a - b()?),
            Operation::Multiply => Ok(args.a * b()?),
            Operation::Divide => {
                let b = b()?;
                if b == 0.0 {
                    Err("division by zero".to_string())
                } else {
                    Ok(args.a / b)
                }
            }
            Operation::Sqrt => {
                if args.a < 0.0 {
                    Err("square root of a negative number".to_string())
                } else {
                    Ok(args.a.sqrt())
                }
            }
        }
    }
}

#[async_trait]
impl Tool for CalculateTool {
    fn name(&self) -> &str {
        "calculate"
    }

    fn description(&self) -> &str {
        "Perform basic arithmetic: add, subtract, multiply, divide, or square root"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "description": "The operation to perform",
                    "enum": ["add", "subtract", "multiply", "divide", "sqrt"]
                },
                "a": {
                    "type": "number",
                    "description": "First operand (the only operand for sqrt)"
                },
                "b": {
                    "type": "number",
                    "description": "Second operand (not used for sqrt)"
                }
            },
            "required": ["operation", "a"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let args: Args = serde_json::from_value(args)?;

        match Self::apply(&args) {
            Ok(result) => Ok(ToolResult::ok(serde_json::json!({ "result": result }))),
            Err(message) => Ok(ToolResult::error(message)),
        }
    }
}
