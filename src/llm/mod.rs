// ABOUTME: LLM module - client abstraction for the model backend.
// ABOUTME: Defines types, the client trait, the Gemini backend, and sessions.

mod client;
mod gemini;
mod session;
mod types;

pub use client::*;
pub use gemini::*;
pub use session::*;
pub use types::*;
