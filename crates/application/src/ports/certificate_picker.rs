//! Certificate file selection port

use std::path::PathBuf;

use courier_domain::tls::CertificateSlot;

/// Prompts the user for a certificate file.
///
/// Implementations filter the choice to
/// [`CERTIFICATE_EXTENSIONS`](courier_domain::tls::CERTIFICATE_EXTENSIONS).
/// The chosen path is not validated.
pub trait CertificatePicker: Send + Sync {
    /// Returns the chosen path, or `None` if the user cancelled.
    fn pick(&self, slot: CertificateSlot) -> Option<PathBuf>;
}
