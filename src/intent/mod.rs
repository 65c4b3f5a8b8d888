// ABOUTME: Intent module - closed-set classification of user input.
// ABOUTME: Validates structured model output against a caller-supplied set.

mod classifier;

pub use classifier::IntentClassifier;

#[cfg(test)]
mod classifier_test;
