//! Send Request Use Case
//!
//! Builds a descriptor from the current draft and hands it to the
//! transport exactly once, turning every failure into data.

use std::sync::Arc;

use courier_domain::RequestState;
use courier_domain::request::{RequestDescriptor, RequestDraft};
use courier_domain::response::ResponseDescriptor;

use crate::builder::RequestBuilder;
use crate::error::SendError;
use crate::ports::{Transport, TransportError};

/// Result type for a send attempt.
pub type SendResult = Result<ResponseDescriptor, SendError>;

/// Use case for sending the composed request.
///
/// Each call is independent: concurrent sends are neither serialized
/// nor deduplicated.
///
/// # Example
///
/// ```ignore
/// let transport = ReqwestTransport::new(&TransportSettings::default())?;
/// let use_case = SendRequest::new(Arc::new(transport));
///
/// let draft = RequestDraft::new(HttpMethod::Get, "https://api.example.com/users");
/// let state = use_case.send(&draft).await.to_request_state();
/// ```
#[derive(Clone)]
pub struct SendRequest {
    builder: RequestBuilder,
    transport: Option<Arc<dyn Transport>>,
}

impl SendRequest {
    /// Creates the use case with the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            builder: RequestBuilder::new(),
            transport: Some(transport),
        }
    }

    /// Creates the use case with no transport wired in.
    ///
    /// Every send fails with [`TransportError::Unavailable`].
    #[must_use]
    pub fn without_transport() -> Self {
        Self {
            builder: RequestBuilder::new(),
            transport: None,
        }
    }

    /// Replaces the request builder (e.g. to attach an observer).
    #[must_use]
    pub fn with_builder(mut self, builder: RequestBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Returns the request builder.
    #[must_use]
    pub const fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Returns true if a transport is wired in.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.transport.is_some()
    }

    /// Builds the descriptor for `draft` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Build`] if the draft is invalid.
    pub fn prepare(&self, draft: &RequestDraft) -> Result<RequestDescriptor, SendError> {
        Ok(self.builder.build_draft(draft)?)
    }

    /// Builds and sends the request.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if no transport is available, the draft does
    /// not build, or the transport call fails.
    pub async fn send(&self, draft: &RequestDraft) -> SendResult {
        if self.transport.is_none() {
            return Err(TransportError::Unavailable.into());
        }
        let descriptor = self.prepare(draft)?;
        self.execute(&descriptor).await
    }

    /// Sends an already built descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Transport`] if the call fails.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> SendResult {
        let transport = self
            .transport
            .as_ref()
            .ok_or(TransportError::Unavailable)?;
        Ok(transport.execute(descriptor).await?)
    }
}

/// Extension trait for convenient `RequestState` conversion.
pub trait SendResultExt {
    /// Converts the result to a `RequestState` for the response panel.
    fn to_request_state(self) -> RequestState;
}

impl SendResultExt for SendResult {
    fn to_request_state(self) -> RequestState {
        match self {
            Ok(response) => RequestState::success(response),
            Err(e) => RequestState::error(e.display_line()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use crate::ports::TransportResult;
    use async_trait::async_trait;
    use courier_domain::auth::AuthSetting;
    use courier_domain::request::{BodySetting, FieldRow, HttpMethod};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Mock transport for testing.
    struct MockTransport {
        response: TransportResult<ResponseDescriptor>,
        seen: Mutex<Vec<RequestDescriptor>>,
    }

    impl MockTransport {
        fn status(status: u16) -> Self {
            Self {
                response: Ok(ResponseDescriptor::new(status, BTreeMap::new(), "OK")),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn error(err: TransportError) -> Self {
            Self {
                response: Err(err),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<RequestDescriptor> {
            self.seen.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn execute(
            &self,
            descriptor: &RequestDescriptor,
        ) -> TransportResult<ResponseDescriptor> {
            self.seen.lock().expect("lock").push(descriptor.clone());
            self.response.clone()
        }
    }

    fn post_draft() -> RequestDraft {
        RequestDraft::new(HttpMethod::Post, "https://example.com/api")
            .with_param(FieldRow::new("q", "test"))
            .with_auth(AuthSetting::bearer("abc"))
            .with_body(BodySetting::raw(r#"{"a":1}"#))
    }

    #[tokio::test]
    async fn test_send_success_passes_descriptor_unchanged() {
        let transport = Arc::new(MockTransport::status(200));
        let use_case = SendRequest::new(transport.clone());

        let response = use_case.send(&post_draft()).await.unwrap();
        assert_eq!(response.status, 200);

        let seen = transport.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url(), "https://example.com/api?q=test");
        assert_eq!(seen[0].headers().get("Authorization"), Some("Bearer abc"));
        assert_eq!(seen[0].body(), Some(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let use_case = SendRequest::new(Arc::new(MockTransport::status(500)));
        let state = use_case.send(&post_draft()).await.to_request_state();
        assert!(state.is_success());
    }

    #[tokio::test]
    async fn test_validation_failure_skips_transport() {
        let transport = Arc::new(MockTransport::status(200));
        let use_case = SendRequest::new(transport.clone());

        let draft = RequestDraft::new(HttpMethod::Get, "https://example.com")
            .with_header(FieldRow::new("Host", "evil"));
        let result = use_case.send(&draft).await;

        assert!(matches!(
            result,
            Err(SendError::Build(BuildError::Headers(_)))
        ));
        assert!(transport.seen().is_empty());
    }

    #[tokio::test]
    async fn test_missing_transport() {
        let use_case = SendRequest::without_transport();
        assert!(!use_case.is_available());

        let state = use_case.send(&post_draft()).await.to_request_state();
        assert_eq!(
            state,
            RequestState::error("Error: Transport is not available")
        );
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_panel_line() {
        let use_case = SendRequest::new(Arc::new(MockTransport::error(
            TransportError::Connection("connection refused".to_string()),
        )));
        let state = use_case.send(&post_draft()).await.to_request_state();
        assert_eq!(
            state,
            RequestState::error("Error: Request failed: connection refused")
        );
    }

    #[tokio::test]
    async fn test_unknown_transport_failure() {
        let use_case = SendRequest::new(Arc::new(MockTransport::error(TransportError::Unknown)));
        let state = use_case.send(&post_draft()).await.to_request_state();
        assert_eq!(state, RequestState::error("An unknown error occurred"));
    }

    #[tokio::test]
    async fn test_invalid_url_line() {
        let use_case = SendRequest::new(Arc::new(MockTransport::status(200)));
        let draft = RequestDraft::new(HttpMethod::Get, "not a url");
        let state = use_case.send(&draft).await.to_request_state();
        assert_eq!(state, RequestState::error("Error: Invalid URL format"));
    }

    #[test]
    fn test_prepare_is_synchronous_and_pure() {
        let use_case = SendRequest::without_transport();
        let first = use_case.prepare(&post_draft()).unwrap();
        let second = use_case.prepare(&post_draft()).unwrap();
        assert_eq!(first, second);
    }
}
