//! Editable key/value rows

use serde::{Deserialize, Serialize};

use crate::id::RowId;

/// One editable key/value entry of the parameter or header list.
///
/// Disabled rows are kept in the list but never reach a built request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    /// Stable identity of the row within its list.
    #[serde(default)]
    pub id: RowId,
    /// The parameter or header name
    #[serde(default)]
    pub key: String,
    /// The parameter or header value
    #[serde(default)]
    pub value: String,
    /// Whether this row takes part in the request
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl FieldRow {
    /// Creates a new enabled row.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: RowId::new(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a new disabled row.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(key, value)
        }
    }

    /// Creates the enabled, empty placeholder row.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("", "")
    }

    /// Returns true when both key and value are empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }

    /// Returns true when the row is enabled and has a key.
    ///
    /// Only such rows contribute to a built request.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty()
    }

    /// Returns true when the row is enabled and its key matches `name`
    /// after Unicode lowercasing, the same folding the reserved-name
    /// check uses.
    #[must_use]
    pub fn is_enabled_named(&self, name: &str) -> bool {
        self.enabled && self.key.to_lowercase() == name.to_lowercase()
    }
}
