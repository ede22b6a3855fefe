//! Request body settings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The body type selected on the body tab.
///
/// Drives the `Content-Type` header synthesized when the user
/// does not supply one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentTypeChoice {
    /// URL encoded form
    #[default]
    #[serde(alias = "x-www-form-urlencoded")]
    FormUrlencoded,
    /// Raw text, sent as JSON
    Raw,
    /// Opaque bytes
    Binary,
    /// GraphQL document
    Graphql,
}

impl ContentTypeChoice {
    /// Returns all choices in tab order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::FormUrlencoded, Self::Raw, Self::Binary, Self::Graphql]
    }

    /// Returns the media type sent for this choice.
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::FormUrlencoded => "application/x-www-form-urlencoded",
            Self::Raw => "application/json",
            Self::Binary => "application/octet-stream",
            Self::Graphql => "application/graphql",
        }
    }

    /// Returns the selector label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FormUrlencoded => "form-urlencoded",
            Self::Raw => "raw",
            Self::Binary => "binary",
            Self::Graphql => "graphql",
        }
    }
}

impl fmt::Display for ContentTypeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentTypeChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "form-urlencoded" | "x-www-form-urlencoded" => Ok(Self::FormUrlencoded),
            "raw" => Ok(Self::Raw),
            "binary" => Ok(Self::Binary),
            "graphql" => Ok(Self::Graphql),
            other => Err(DomainError::UnknownContentType(other.to_string())),
        }
    }
}

/// Body tab contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BodySetting {
    /// Selected body type
    #[serde(default)]
    pub content_type: ContentTypeChoice,
    /// The literal body text
    #[serde(default)]
    pub raw_body: String,
}

impl BodySetting {
    /// Creates a body setting.
    #[must_use]
    pub fn new(content_type: ContentTypeChoice, raw_body: impl Into<String>) -> Self {
        Self {
            content_type,
            raw_body: raw_body.into(),
        }
    }

    /// Creates a raw (JSON) body.
    #[must_use]
    pub fn raw(raw_body: impl Into<String>) -> Self {
        Self::new(ContentTypeChoice::Raw, raw_body)
    }
}
