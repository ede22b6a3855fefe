//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the request builder and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure
//! or ui layers.

mod build_observer;
mod certificate_picker;
mod transport;

pub use build_observer::{BuildObserver, NoopObserver};
pub use certificate_picker::CertificatePicker;
pub use transport::{Transport, TransportError, TransportResult};
