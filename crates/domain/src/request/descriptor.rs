//! Canonical request descriptor

use indexmap::IndexMap;
use serde::Serialize;

use super::HttpMethod;
use crate::tls::TlsOptions;

/// Placeholder shown instead of credential header values.
pub const REDACTED: &str = "***";

/// Returns `value`, or [`REDACTED`] when `name` is `Authorization`.
#[must_use]
pub fn redact_header_value<'a>(name: &str, value: &'a str) -> &'a str {
    if name.eq_ignore_ascii_case("authorization") {
        REDACTED
    } else {
        value
    }
}

/// Final, merged header set of a descriptor.
///
/// Keys are unique ignoring ASCII case and keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DescriptorHeaders {
    entries: IndexMap<String, String>,
}

impl DescriptorHeaders {
    /// Creates an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .keys()
            .position(|existing| existing.eq_ignore_ascii_case(name))
    }

    /// Inserts a header, replacing any entry whose name matches ignoring
    /// case. The replacement keeps the original position but takes the new
    /// spelling of the name. Returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(index) => {
                let (_, previous) = self.entries.shift_remove_index(index)?;
                self.entries.shift_insert(index, name, value);
                Some(previous)
            }
            None => {
                self.entries.insert(name, value);
                None
            }
        }
    }

    /// Returns the value of a header, matching the name ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|index| self.entries.get_index(index))
            .map(|(_, value)| value.as_str())
    }

    /// Returns true if a header with this name (ignoring case) exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterates headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DescriptorHeaders {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Fully resolved, immutable description of one outgoing request.
///
/// The URL already embeds the query string; the transport sends
/// method, URL, headers and body unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDescriptor {
    method: HttpMethod,
    url: String,
    headers: DescriptorHeaders,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(flatten)]
    tls: TlsOptions,
}

impl RequestDescriptor {
    /// Assembles a descriptor from already canonical parts.
    #[must_use]
    pub const fn new(
        method: HttpMethod,
        url: String,
        headers: DescriptorHeaders,
        body: Option<String>,
        tls: TlsOptions,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
            tls,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Absolute URL including the query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Merged header set.
    #[must_use]
    pub const fn headers(&self) -> &DescriptorHeaders {
        &self.headers
    }

    /// Body text, absent for GET.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// TLS options handed through to the transport.
    #[must_use]
    pub const fn tls(&self) -> &TlsOptions {
        &self.tls
    }

    /// Returns a copy safe to log: the `Authorization` value is masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| (name, redact_header_value(name, value)))
            .collect();
        Self {
            headers,
            ..self.clone()
        }
    }
}
