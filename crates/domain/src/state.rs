//! Response panel state.
//!
//! The panel shows either the last successful response or a single
//! human-readable error line; it never surfaces a fault.

use crate::response::ResponseDescriptor;

/// Message shown when a failure carries no usable description.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// State of the most recent send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing has been sent yet.
    #[default]
    Idle,

    /// A send is in flight.
    Loading,

    /// The transport returned a response (any status).
    Success {
        /// The response data.
        response: Box<ResponseDescriptor>,
    },

    /// The send failed before or during transport.
    Error {
        /// The full line shown to the user.
        message: String,
    },
}

impl RequestState {
    /// Creates a Success state from a response.
    #[must_use]
    pub fn success(response: ResponseDescriptor) -> Self {
        Self::Success {
            response: Box::new(response),
        }
    }

    /// Creates an Error state from a display line.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Returns true if a request is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the last request succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true if the last request failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns the response if in Success state.
    #[must_use]
    pub fn response(&self) -> Option<&ResponseDescriptor> {
        match self {
            Self::Success { response } => Some(response),
            _ => None,
        }
    }

    /// Text for the response panel.
    ///
    /// With `pretty` set, a response renders as indented JSON of
    /// status, headers and body; otherwise the raw body is shown.
    #[must_use]
    pub fn panel_text(&self, pretty: bool) -> String {
        match self {
            Self::Idle | Self::Loading => String::new(),
            Self::Success { response } if pretty => response
                .to_pretty_json()
                .unwrap_or_else(|_| response.body.clone()),
            Self::Success { response } => response.body.clone(),
            Self::Error { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_request_state_idle() {
        let state = RequestState::Idle;
        assert!(!state.is_loading());
        assert!(!state.is_success());
        assert!(!state.is_error());
        assert_eq!(state.panel_text(true), "");
    }

    #[test]
    fn test_request_state_success() {
        let state = RequestState::success(ResponseDescriptor::new(404, BTreeMap::new(), "nope"));
        assert!(state.is_success());
        assert_eq!(state.response().map(|r| r.status), Some(404));
        assert!(state.panel_text(true).contains("\"status\": 404"));
        assert_eq!(state.panel_text(false), "nope");
    }

    #[test]
    fn test_request_state_error() {
        let state = RequestState::error("Error: boom");
        assert!(state.is_error());
        assert_eq!(state.panel_text(true), "Error: boom");
    }
}
