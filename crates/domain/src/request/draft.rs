//! Editor snapshot handed to the request builder

use serde::{Deserialize, Serialize};

use super::{BodySetting, FieldRow, HttpMethod};
use crate::auth::AuthSetting;
use crate::tls::TlsOptions;

/// Immutable snapshot of everything the user has entered.
///
/// A fresh draft is taken on every send; building from the same draft
/// always yields the same descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequestDraft {
    /// Selected method
    #[serde(default)]
    pub method: HttpMethod,
    /// URL as typed
    #[serde(default)]
    pub url: String,
    /// Query parameter rows
    #[serde(default)]
    pub params: Vec<FieldRow>,
    /// Header rows
    #[serde(default)]
    pub headers: Vec<FieldRow>,
    /// Authorization tab
    #[serde(default)]
    pub auth: AuthSetting,
    /// Body tab
    #[serde(default)]
    pub body: BodySetting,
    /// Client certificate options
    #[serde(default)]
    pub tls: TlsOptions,
    /// Pre-request script text, stored but never run
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pre_request_script: String,
    /// Test script text, stored but never run
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub test_script: String,
}

impl RequestDraft {
    /// Creates a draft for the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Self::default()
        }
    }

    /// Adds a query parameter row.
    #[must_use]
    pub fn with_param(mut self, row: FieldRow) -> Self {
        self.params.push(row);
        self
    }

    /// Adds a header row.
    #[must_use]
    pub fn with_header(mut self, row: FieldRow) -> Self {
        self.headers.push(row);
        self
    }

    /// Sets the authorization tab.
    #[must_use]
    pub fn with_auth(mut self, auth: AuthSetting) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the body tab.
    #[must_use]
    pub fn with_body(mut self, body: BodySetting) -> Self {
        self.body = body;
        self
    }
}
