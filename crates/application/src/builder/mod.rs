//! Request builder
//!
//! Turns the editable rows and tab settings into a canonical
//! [`RequestDescriptor`]. Building is a pure function of its inputs;
//! the only side channel is the optional [`BuildObserver`].

mod validate;

use std::sync::Arc;

use courier_domain::ValidationError;
use courier_domain::auth::AuthSetting;
use courier_domain::request::{
    BodySetting, DescriptorHeaders, FieldRow, HttpMethod, RequestDescriptor, RequestDraft,
    redact_header_value,
};
use courier_domain::tls::TlsOptions;
use url::Url;

pub use validate::{RESERVED_HEADERS, is_valid_header_name, validate_headers};

use crate::error::BuildError;
use crate::ports::{BuildObserver, NoopObserver};

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";

/// Builds request descriptors from editor snapshots.
#[derive(Clone)]
pub struct RequestBuilder {
    observer: Arc<dyn BuildObserver>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder").finish_non_exhaustive()
    }
}

impl RequestBuilder {
    /// Creates a builder without diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoopObserver),
        }
    }

    /// Creates a builder that reports to `observer`.
    #[must_use]
    pub fn with_observer(observer: Arc<dyn BuildObserver>) -> Self {
        Self { observer }
    }

    /// Validates header rows. See [`validate_headers`].
    #[must_use]
    pub fn validate_headers(&self, rows: &[FieldRow]) -> Vec<ValidationError> {
        validate_headers(rows)
    }

    /// Builds a descriptor, returning every violation on failure.
    ///
    /// # Errors
    ///
    /// Returns a single error for a missing or malformed URL, otherwise
    /// the full list of header violations.
    pub fn build(
        &self,
        method: HttpMethod,
        raw_url: &str,
        params: &[FieldRow],
        headers: &[FieldRow],
        auth: &AuthSetting,
        body: &BodySetting,
    ) -> Result<RequestDescriptor, Vec<ValidationError>> {
        self.build_checked(method, raw_url, params, headers, auth, body, TlsOptions::default())
            .map_err(BuildError::into_errors)
    }

    /// Builds a descriptor from a full draft, carrying its TLS options.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Url`] or [`BuildError::Headers`].
    pub fn build_draft(&self, draft: &RequestDraft) -> Result<RequestDescriptor, BuildError> {
        self.build_checked(
            draft.method,
            &draft.url,
            &draft.params,
            &draft.headers,
            &draft.auth,
            &draft.body,
            draft.tls.clone(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build_checked(
        &self,
        method: HttpMethod,
        raw_url: &str,
        params: &[FieldRow],
        headers: &[FieldRow],
        auth: &AuthSetting,
        body: &BodySetting,
        tls: TlsOptions,
    ) -> Result<RequestDescriptor, BuildError> {
        let mut url = parse_url(raw_url).map_err(BuildError::Url)?;

        let violations = validate_headers(headers);
        if !violations.is_empty() {
            return Err(BuildError::Headers(violations));
        }

        self.append_params(&mut url, params);
        let mut header_map = self.collect_headers(headers);

        if !headers.iter().any(|row| row.is_enabled_named(CONTENT_TYPE)) {
            let media_type = body.content_type.media_type();
            self.observer.default_header_added(CONTENT_TYPE, media_type);
            header_map.insert(CONTENT_TYPE, media_type);
        }

        if let Some(value) = auth.authorization_value()
            && !headers.iter().any(|row| row.is_enabled_named(AUTHORIZATION))
        {
            self.observer
                .default_header_added(AUTHORIZATION, redact_header_value(AUTHORIZATION, &value));
            header_map.insert(AUTHORIZATION, value);
        }

        let body = method.carries_body().then(|| body.raw_body.clone());

        let descriptor = RequestDescriptor::new(method, url.into(), header_map, body, tls);
        self.observer.descriptor_built(&descriptor.redacted());
        Ok(descriptor)
    }

    fn append_params(&self, url: &mut Url, params: &[FieldRow]) {
        let mut active = params.iter().filter(|row| row.is_active()).peekable();
        if active.peek().is_none() {
            return;
        }

        let mut pairs = url.query_pairs_mut();
        for row in active {
            self.observer.param_added(&row.key, &row.value);
            pairs.append_pair(&row.key, &row.value);
        }
    }

    fn collect_headers(&self, rows: &[FieldRow]) -> DescriptorHeaders {
        let mut map = DescriptorHeaders::new();
        for row in rows.iter().filter(|row| row.is_active()) {
            self.observer
                .header_added(&row.key, redact_header_value(&row.key, &row.value));
            // Unreachable for validated rows; later rows win.
            map.insert(row.key.clone(), row.value.clone());
        }
        map
    }
}

fn parse_url(raw_url: &str) -> Result<Url, ValidationError> {
    if raw_url.is_empty() {
        return Err(ValidationError::new("URL is required"));
    }
    Url::parse(raw_url).map_err(|_| ValidationError::new("Invalid URL format"))
}
