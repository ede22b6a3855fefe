//! Transport port

use async_trait::async_trait;
use courier_domain::request::RequestDescriptor;
use courier_domain::response::ResponseDescriptor;
use thiserror::Error;

/// Result type for transport calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures of the transport exchange itself.
///
/// Non-2xx statuses are responses, not errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// No transport is wired into the composer.
    #[error("Transport is not available")]
    Unavailable,

    /// The descriptor URL was rejected by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value cannot be sent.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A certificate, key or CA file could not be read or parsed.
    #[error("{0}")]
    Certificate(String),

    /// The underlying client could not be configured.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that was exceeded.
        timeout_ms: u64,
    },

    /// Connecting or exchanging data failed.
    #[error("Request failed: {0}")]
    Connection(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// A plain failure message, shown verbatim.
    #[error("{0}")]
    Message(String),

    /// A failure without any usable description.
    #[error("An unknown error occurred")]
    Unknown,
}

/// Port for executing request descriptors.
///
/// The transport owns retries, timeouts and streaming; callers issue
/// exactly one `execute` per send.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the descriptor unchanged and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails. Any HTTP status,
    /// including 4xx and 5xx, is a successful response.
    async fn execute(&self, descriptor: &RequestDescriptor) -> TransportResult<ResponseDescriptor>;
}
