//! Transport settings
//!
//! User preferences that shape how descriptors are executed.

use serde::{Deserialize, Serialize};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default redirect limit.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Settings applied by the transport to every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportSettings {
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// `User-Agent` sent when the request has none.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum redirects followed.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    /// Render successful responses as indented JSON.
    #[serde(default = "default_true")]
    pub pretty_print_responses: bool,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    format!("Courier/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

const fn default_true() -> bool {
    true
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            pretty_print_responses: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = TransportSettings::default();
        assert_eq!(settings.timeout_ms, 30_000);
        assert_eq!(settings.max_redirects, 10);
        assert!(settings.user_agent.starts_with("Courier/"));
        assert!(settings.pretty_print_responses);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: TransportSettings = serde_json::from_str(r#"{"timeout_ms": 500}"#).unwrap();
        assert_eq!(settings.timeout_ms, 500);
        assert_eq!(settings.max_redirects, DEFAULT_MAX_REDIRECTS);
        assert!(settings.pretty_print_responses);
    }
}
