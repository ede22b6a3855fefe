//! One send from a draft file.

use std::path::Path;
use std::sync::Arc;

use courier_application::ports::TransportError;
use courier_application::{RequestBuilder, SendRequest};
use courier_domain::{RequestState, TransportSettings, ValidationError};
use courier_infrastructure::{DraftFileError, ReqwestTransport, TracingBuildObserver, load_draft};
use courier_ui::{BridgeError, EditorCommand, EditorState, RfdCertificatePicker, UiBridge, UiCommand, UiUpdate};
use thiserror::Error;

/// Errors that stop a run before a send attempt is reported.
#[derive(Debug, Error)]
pub enum AppError {
    /// The draft file could not be loaded.
    #[error(transparent)]
    Draft(#[from] DraftFileError),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The editor worker stopped unexpectedly.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Result of sending one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Final state of the response panel.
    pub state: RequestState,
    /// Header problems reported by the editor.
    pub validation_errors: Vec<ValidationError>,
    /// Whether successful responses render as indented JSON.
    pub pretty: bool,
}

impl RunOutcome {
    /// Text shown in the response panel.
    #[must_use]
    pub fn panel_text(&self) -> String {
        self.state.panel_text(self.pretty)
    }

    /// True when the send ended in an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.state.is_error()
    }
}

/// Loads `draft_path`, replays it into a fresh editor and sends it.
///
/// # Errors
///
/// Returns an error if the draft cannot be loaded, the client cannot be
/// built, or the editor worker fails. Build and transport failures are
/// reported through [`RunOutcome::state`] instead.
pub async fn run(draft_path: &Path, settings: &TransportSettings) -> Result<RunOutcome, AppError> {
    let draft = load_draft(draft_path).await?;
    let transport = ReqwestTransport::new(settings)?;
    let send_request = SendRequest::new(Arc::new(transport))
        .with_builder(RequestBuilder::with_observer(Arc::new(TracingBuildObserver)));

    let bridge = UiBridge::spawn(
        EditorState::new(),
        send_request,
        Arc::new(RfdCertificatePicker),
    );
    for command in EditorCommand::replay(&draft) {
        bridge.send(UiCommand::Edit(command))?;
    }
    bridge.send(UiCommand::Send)?;

    let (editor, updates) = bridge.shutdown().await?;
    for warning in editor.security_warnings() {
        tracing::warn!(?warning, "insecure TLS option");
    }

    let state = updates
        .into_iter()
        .rev()
        .find_map(|update| match update {
            UiUpdate::Response(state) => Some(state),
            UiUpdate::ValidationErrors(_) | UiUpdate::Loading => None,
        })
        .unwrap_or_default();

    Ok(RunOutcome {
        state,
        validation_errors: editor.validation_errors,
        pretty: settings.pretty_print_responses,
    })
}
