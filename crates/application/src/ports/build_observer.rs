//! Build observer port

use courier_domain::request::RequestDescriptor;

/// Receives diagnostics while a descriptor is being built.
///
/// Values of `Authorization` headers are already masked when they reach
/// an observer, and `descriptor_built` receives a redacted copy.
pub trait BuildObserver: Send + Sync {
    /// A query parameter was appended to the URL.
    fn param_added(&self, _key: &str, _value: &str) {}

    /// A user header row was added to the header map.
    fn header_added(&self, _name: &str, _value: &str) {}

    /// A header was synthesized (`Content-Type`, `Authorization`).
    fn default_header_added(&self, _name: &str, _value: &str) {}

    /// The final descriptor, with credentials redacted.
    fn descriptor_built(&self, _descriptor: &RequestDescriptor) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BuildObserver for NoopObserver {}
