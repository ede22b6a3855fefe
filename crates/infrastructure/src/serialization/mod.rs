//! Serialization helpers for settings and draft files.
//!
//! JSON output is deterministic: 2-space indentation, trailing newline,
//! field order as declared. YAML is accepted on input only.

mod json;
mod yaml;

pub use json::*;
pub use yaml::from_yaml;
