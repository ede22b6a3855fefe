//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port using the reqwest library.
//! It sends descriptors exactly as built: method, URL with query string,
//! header map and optional body.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use courier_application::ports::{Transport, TransportError, TransportResult};
use courier_domain::TransportSettings;
use courier_domain::request::{HttpMethod, RequestDescriptor};
use courier_domain::response::ResponseDescriptor;
use courier_domain::tls::TlsOptions;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Certificate, Client, ClientBuilder, Identity, Method, Url};

/// HTTP transport backed by `reqwest::Client`.
///
/// Requests without TLS options share one pooled client. Requests that
/// carry a client identity, extra CA or disabled verification get a
/// dedicated client configured from those files.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    settings: TransportSettings,
}

impl ReqwestTransport {
    /// Creates a transport from the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &TransportSettings) -> TransportResult<Self> {
        let client = Self::client_builder(settings)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    /// Creates a transport around a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, settings: TransportSettings) -> Self {
        Self { client, settings }
    }

    /// Returns the settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    fn client_builder(settings: &TransportSettings) -> ClientBuilder {
        Client::builder()
            .user_agent(settings.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    async fn read_file(path: &Path, what: &str) -> TransportResult<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| TransportError::Certificate(format!("Failed to read {what}: {e}")))
    }

    /// Returns the client to use for the given TLS options.
    async fn client_for(&self, tls: &TlsOptions) -> TransportResult<Client> {
        if tls.is_default() {
            return Ok(self.client.clone());
        }

        let mut builder = Self::client_builder(&self.settings);

        if let Some((cert_path, key_path)) = tls.client_identity() {
            let mut pem = Self::read_file(cert_path, "certificate").await?;
            let key = Self::read_file(key_path, "private key").await?;
            pem.push(b'\n');
            pem.extend_from_slice(&key);
            let identity = Identity::from_pem(&pem).map_err(|e| {
                TransportError::Certificate(format!("Failed to create certificate: {e}"))
            })?;
            builder = builder.identity(identity);
        }

        if let Some(ca_path) = &tls.ca_path {
            let ca = Self::read_file(ca_path, "CA certificate").await?;
            let ca = Certificate::from_pem(&ca).map_err(|e| {
                TransportError::Certificate(format!("Failed to parse CA certificate: {e}"))
            })?;
            builder = builder.add_root_certificate(ca);
        }

        if tls.skip_verification {
            tracing::warn!("certificate verification disabled for this request");
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))
    }

    /// Converts descriptor headers into a reqwest `HeaderMap`.
    fn header_map(descriptor: &RequestDescriptor) -> TransportResult<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(descriptor.headers().len());
        for (name, value) in descriptor.headers().iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: self.settings.timeout_ms,
            };
        }

        if error.is_redirect() {
            return TransportError::Message(format!(
                "Too many redirects (limit {})",
                self.settings.max_redirects
            ));
        }

        if error.is_builder() {
            return TransportError::InvalidUrl(error.to_string());
        }

        TransportError::Connection(error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, descriptor: &RequestDescriptor) -> TransportResult<ResponseDescriptor> {
        let url = Url::parse(descriptor.url())
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", descriptor.url())))?;
        let headers = Self::header_map(descriptor)?;
        let client = self.client_for(descriptor.tls()).await?;

        let mut builder = client
            .request(Self::to_reqwest_method(descriptor.method()), url)
            .timeout(Duration::from_millis(self.settings.timeout_ms))
            .headers(headers);

        if let Some(body) = descriptor.body() {
            builder = builder.body(body.to_owned());
        }

        let start = Instant::now();
        tracing::debug!(method = %descriptor.method(), url = descriptor.url(), "sending request");

        let response = builder.send().await.map_err(|e| {
            let error = self.map_error(&e);
            tracing::warn!(method = %descriptor.method(), url = descriptor.url(), %error, "request failed");
            error
        })?;

        let status = response.status().as_u16();
        let response_headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::info!(
            method = %descriptor.method(),
            url = descriptor.url(),
            status,
            elapsed_ms,
            "request completed"
        );

        Ok(ResponseDescriptor::new(status, response_headers, body))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use courier_domain::request::DescriptorHeaders;
    use pretty_assertions::assert_eq;

    fn descriptor(headers: DescriptorHeaders, tls: TlsOptions) -> RequestDescriptor {
        RequestDescriptor::new(
            HttpMethod::Get,
            "http://127.0.0.1:9/".to_string(),
            headers,
            None,
            tls,
        )
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(ReqwestTransport::to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(ReqwestTransport::to_reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(ReqwestTransport::to_reqwest_method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(ReqwestTransport::to_reqwest_method(HttpMethod::Head), Method::HEAD);
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Options),
            Method::OPTIONS
        );
    }

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(&TransportSettings::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_header_map_keeps_every_header() {
        let headers: DescriptorHeaders = [("Accept", "application/json"), ("X-Id", "7")]
            .into_iter()
            .collect();
        let map = ReqwestTransport::header_map(&descriptor(headers, TlsOptions::default())).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x-id").unwrap().to_str().unwrap(), "7");
    }

    #[test]
    fn test_header_map_rejects_bad_value() {
        let headers: DescriptorHeaders = [("X-Bad", "line\nbreak")].into_iter().collect();
        let result = ReqwestTransport::header_map(&descriptor(headers, TlsOptions::default()));
        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }

    #[tokio::test]
    async fn test_missing_ca_file_is_reported() {
        let transport = ReqwestTransport::new(&TransportSettings::default()).unwrap();
        let tls = TlsOptions {
            ca_path: Some("/definitely/not/here/ca.pem".into()),
            ..TlsOptions::default()
        };
        let result = transport
            .execute(&descriptor(DescriptorHeaders::new(), tls))
            .await;
        match result {
            Err(TransportError::Certificate(message)) => {
                assert!(message.starts_with("Failed to read CA certificate"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_client_certificate_is_reported() {
        let transport = ReqwestTransport::new(&TransportSettings::default()).unwrap();
        let tls = TlsOptions {
            cert_path: Some("/definitely/not/here/client.pem".into()),
            key_path: Some("/definitely/not/here/client.key".into()),
            ..TlsOptions::default()
        };
        let result = transport
            .execute(&descriptor(DescriptorHeaders::new(), tls))
            .await;
        match result {
            Err(TransportError::Certificate(message)) => {
                assert!(message.starts_with("Failed to read certificate"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_skip_verification_builds_client() {
        let transport = ReqwestTransport::new(&TransportSettings::default()).unwrap();
        let tls = TlsOptions {
            skip_verification: true,
            ..TlsOptions::default()
        };
        assert!(transport.client_for(&tls).await.is_ok());
    }
}
