// src/domain/validation.rs
use serde::Serialize;

/// Outcome of evaluating a single rule against a candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn new(passed: bool, message: impl Into<String>) -> Self {
        Self {
            passed,
            message: message.into(),
        }
    }

    pub fn passed(message: impl Into<String>) -> Self {
        Self::new(true, message)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
