//! Infrastructure adapters

mod reqwest_transport;
mod tracing_observer;

pub use reqwest_transport::ReqwestTransport;
pub use tracing_observer::TracingBuildObserver;
