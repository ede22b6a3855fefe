//! Application error types

use courier_domain::ValidationError;
use courier_domain::state::UNKNOWN_ERROR_MESSAGE;
use thiserror::Error;

use crate::ports::TransportError;

/// Why a descriptor could not be built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The URL is empty or not absolute. No further checks were run.
    #[error("{0}")]
    Url(ValidationError),

    /// One or more header rows violate the header rules.
    #[error("Header validation failed:\n{}", join_messages(.0))]
    Headers(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

impl BuildError {
    /// Flattens into the list of violations.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            Self::Url(error) => vec![error],
            Self::Headers(errors) => errors,
        }
    }

    /// Borrows the list of violations.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Url(error) => std::slice::from_ref(error),
            Self::Headers(errors) => errors,
        }
    }
}

/// Failure of a send attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// The editor state did not produce a descriptor.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The transport call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SendError {
    /// The single line shown in the response panel.
    #[must_use]
    pub fn display_line(&self) -> String {
        match self {
            Self::Transport(TransportError::Unknown) => UNKNOWN_ERROR_MESSAGE.to_string(),
            other => format!("Error: {other}"),
        }
    }

    /// Returns the validation errors, if this was a build failure.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Build(error) => error.errors(),
            Self::Transport(_) => &[],
        }
    }
}
