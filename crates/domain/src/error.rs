//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while interpreting user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The authorization mode is not one of `none`, `bearer`, `basic`.
    #[error("unknown auth mode: {0}")]
    UnknownAuthMode(String),

    /// The body content type choice is not recognized.
    #[error("unknown content type choice: {0}")]
    UnknownContentType(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
