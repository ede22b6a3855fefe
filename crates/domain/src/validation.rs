//! Validation error type

use std::fmt;

use serde::{Deserialize, Serialize};

/// One violated input rule.
///
/// Validation failures are collected as a list of these and returned
/// as data so every violation can be rendered at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
