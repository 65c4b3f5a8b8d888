// ABOUTME: Root module for relay - tool-calling orchestration for LLM agents.
// ABOUTME: Re-exports all public types from submodules.

pub mod dispatch;
pub mod error;
pub mod intent;
pub mod llm;
pub mod prelude;
pub mod route;
pub mod tool;
pub mod tools;

pub use error::RelayError;
