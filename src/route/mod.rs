// ABOUTME: Route module - complexity-based routing across model tiers.
// ABOUTME: Classifies prompts and forwards them to a fast or capable model.

mod router;

pub use router::{Complexity, ComplexityRouter, ModelTier};
