//! Build diagnostics emitted through `tracing`.

use courier_application::ports::BuildObserver;
use courier_domain::request::RequestDescriptor;

/// Logs every step of a descriptor build.
///
/// Parameter and header additions are `debug` events; the final
/// (redacted) descriptor is an `info` event serialized as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBuildObserver;

impl BuildObserver for TracingBuildObserver {
    fn param_added(&self, key: &str, value: &str) {
        tracing::debug!(key, value, "adding query parameter");
    }

    fn header_added(&self, name: &str, value: &str) {
        tracing::debug!(name, value, "adding header");
    }

    fn default_header_added(&self, name: &str, value: &str) {
        tracing::debug!(name, value, "adding default header");
    }

    fn descriptor_built(&self, descriptor: &RequestDescriptor) {
        match serde_json::to_string(descriptor) {
            Ok(request) => tracing::info!(%request, "final request descriptor"),
            Err(error) => tracing::warn!(%error, "could not serialize request descriptor"),
        }
    }
}
