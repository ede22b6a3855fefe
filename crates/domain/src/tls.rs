//! Client TLS options passed through to the transport.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File extensions offered when picking a certificate file.
pub const CERTIFICATE_EXTENSIONS: &[&str] = &["pem", "crt", "cer"];

/// TLS options carried by a draft and its descriptor.
///
/// The builder never inspects these; the transport reads the files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsOptions {
    /// Client certificate (PEM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_path: Option<PathBuf>,
    /// Private key for the client certificate (PEM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<PathBuf>,
    /// Extra CA certificate to trust (PEM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_path: Option<PathBuf>,
    /// Accept invalid server certificates (dangerous!).
    #[serde(default)]
    pub skip_verification: bool,
}

impl TlsOptions {
    /// Returns the certificate and key paths when both are set.
    #[must_use]
    pub fn client_identity(&self) -> Option<(&Path, &Path)> {
        match (&self.cert_path, &self.key_path) {
            (Some(cert), Some(key)) => Some((cert.as_path(), key.as_path())),
            _ => None,
        }
    }

    /// Stores a picked path in the given slot.
    pub fn set(&mut self, slot: CertificateSlot, path: PathBuf) {
        match slot {
            CertificateSlot::Certificate => self.cert_path = Some(path),
            CertificateSlot::PrivateKey => self.key_path = Some(path),
            CertificateSlot::CaCertificate => self.ca_path = Some(path),
        }
    }

    /// Returns true if no option deviates from the default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// Check if this config uses any dangerous/insecure options.
    #[must_use]
    pub fn security_warnings(&self) -> Vec<TlsSecurityWarning> {
        let mut warnings = vec![];

        if self.skip_verification {
            warnings.push(TlsSecurityWarning::CertificateVerificationDisabled);
        }

        if self.cert_path.is_some() != self.key_path.is_some() {
            warnings.push(TlsSecurityWarning::IncompleteClientIdentity);
        }

        warnings
    }
}

/// Where a picked certificate file goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateSlot {
    /// Client certificate.
    Certificate,
    /// Client private key.
    PrivateKey,
    /// Trusted CA certificate.
    CaCertificate,
}

impl CertificateSlot {
    /// Title for the file dialog.
    #[must_use]
    pub const fn dialog_title(self) -> &'static str {
        match self {
            Self::Certificate => "Select Client Certificate",
            Self::PrivateKey => "Select Private Key",
            Self::CaCertificate => "Select CA Certificate",
        }
    }
}

/// Security warnings for TLS options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsSecurityWarning {
    /// Server certificates are not verified.
    CertificateVerificationDisabled,
    /// Only one of certificate and key is set, so no identity is sent.
    IncompleteClientIdentity,
}

impl fmt::Display for TlsSecurityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CertificateVerificationDisabled => {
                write!(f, "Certificate verification is disabled")
            }
            Self::IncompleteClientIdentity => {
                write!(f, "Client certificate and private key must both be set")
            }
        }
    }
}
