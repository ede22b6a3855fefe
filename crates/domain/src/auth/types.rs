//! Authorization settings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Authorization mode selected on the auth tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// No authorization header is synthesized
    #[default]
    None,
    /// `Authorization: Bearer <token>`
    Bearer,
    /// Selectable only; no credentials are captured yet
    Basic,
}

impl AuthMode {
    /// Returns the selector label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bearer => "bearer",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "bearer" => Ok(Self::Bearer),
            "basic" => Ok(Self::Basic),
            other => Err(DomainError::UnknownAuthMode(other.to_string())),
        }
    }
}

/// Authorization tab contents.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthSetting {
    /// Selected mode
    #[serde(default)]
    pub mode: AuthMode,
    /// Bearer token, only meaningful in [`AuthMode::Bearer`]
    #[serde(default)]
    pub token: String,
}

impl AuthSetting {
    /// No authorization.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Bearer token authorization.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            mode: AuthMode::Bearer,
            token: token.into(),
        }
    }

    /// Returns the `Authorization` value to synthesize, if any.
    #[must_use]
    pub fn authorization_value(&self) -> Option<String> {
        match self.mode {
            AuthMode::Bearer if !self.token.is_empty() => Some(format!("Bearer {}", self.token)),
            _ => None,
        }
    }
}

impl fmt::Debug for AuthSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSetting")
            .field("mode", &self.mode)
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .finish()
    }
}
