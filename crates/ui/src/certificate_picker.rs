//! Native file dialog for certificate selection.

use std::path::PathBuf;

use courier_application::ports::CertificatePicker;
use courier_domain::tls::{CERTIFICATE_EXTENSIONS, CertificateSlot};

/// Opens the platform file dialog filtered to certificate files.
///
/// The dialog blocks the calling thread; callers on the async runtime
/// run it through `spawn_blocking`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdCertificatePicker;

impl CertificatePicker for RfdCertificatePicker {
    fn pick(&self, slot: CertificateSlot) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(slot.dialog_title())
            .add_filter("Certificates", CERTIFICATE_EXTENSIONS)
            .pick_file()
    }
}
