//! Courier Application - Request building and ports
//!
//! This crate defines the application layer with:
//! - The request builder that turns editor snapshots into descriptors
//! - Port traits (interfaces for external dependencies)
//! - The send use case and its error handling

pub mod builder;
pub mod error;
pub mod ports;
pub mod send_request;

pub use builder::{RequestBuilder, validate_headers};
pub use error::{BuildError, SendError};
pub use ports::{
    BuildObserver, CertificatePicker, NoopObserver, Transport, TransportError, TransportResult,
};
pub use send_request::{SendRequest, SendResult, SendResultExt};
