//! Courier Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod import;
pub mod persistence;
pub mod serialization;

pub use adapters::{ReqwestTransport, TracingBuildObserver};
pub use import::{DraftFileError, DraftFormat, load_draft, parse_draft};
pub use persistence::{SettingsError, SettingsRepository};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, from_yaml, to_json_stable,
    to_json_stable_bytes,
};
