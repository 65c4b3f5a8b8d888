// ABOUTME: Built-in tools for the chat agent.
// ABOUTME: Weather lookup, arithmetic, time queries, and unit conversion.

mod calculate;
mod convert;
mod time;
mod weather;

pub use calculate::{CalculateTool, Operation};
pub use convert::{ConvertTool, Unit};
pub use time::TimeTool;
pub use weather::WeatherTool;
