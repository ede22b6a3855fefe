//! UI Bridge Module
//!
//! Defines the communication protocol between the UI thread and the
//! async Tokio runtime.

use std::sync::Arc;

use courier_application::ports::CertificatePicker;
use courier_application::{BuildError, SendError, SendRequest, SendResultExt};
use courier_domain::tls::CertificateSlot;
use courier_domain::{RequestState, ValidationError};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};

use crate::state::{EditorCommand, EditorState};

/// Commands sent from UI to the async runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// User edited the request.
    Edit(EditorCommand),

    /// User clicked a certificate "Browse" button.
    PickCertificate(CertificateSlot),

    /// User clicked Send.
    Send,
}

/// Updates sent from async runtime to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// Header problems changed.
    ValidationErrors(Vec<ValidationError>),

    /// A request passed validation and is in flight.
    Loading,

    /// A send attempt finished.
    Response(RequestState),
}

/// Errors talking to the bridge worker.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The worker has stopped.
    #[error("UI worker is no longer running")]
    Closed,

    /// The worker task panicked or was cancelled.
    #[error("UI worker failed: {0}")]
    Worker(#[from] JoinError),
}

/// Handle to the worker that owns the editor state.
#[derive(Debug)]
pub struct UiBridge {
    commands: mpsc::UnboundedSender<UiCommand>,
    updates: mpsc::UnboundedReceiver<UiUpdate>,
    worker: JoinHandle<EditorState>,
}

impl UiBridge {
    /// Starts the worker on the current Tokio runtime.
    #[must_use]
    pub fn spawn(
        state: EditorState,
        send_request: SendRequest,
        picker: Arc<dyn CertificatePicker>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();
        let (update_tx, update_rx) = mpsc::unbounded_channel::<UiUpdate>();

        let worker = tokio::spawn(run_worker(state, send_request, picker, cmd_rx, update_tx));

        Self {
            commands: cmd_tx,
            updates: update_rx,
            worker,
        }
    }

    /// Queues a command.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Closed`] if the worker has stopped.
    pub fn send(&self, command: UiCommand) -> Result<(), BridgeError> {
        self.commands.send(command).map_err(|_| BridgeError::Closed)
    }

    /// Waits for the next update. `None` once the worker and every
    /// in-flight send have finished.
    pub async fn next_update(&mut self) -> Option<UiUpdate> {
        self.updates.recv().await
    }

    /// Stops accepting commands, waits for in-flight sends and returns
    /// the final editor state with the updates not yet consumed.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Worker`] if the worker task failed.
    pub async fn shutdown(self) -> Result<(EditorState, Vec<UiUpdate>), BridgeError> {
        let Self {
            commands,
            mut updates,
            worker,
        } = self;
        drop(commands);

        let mut pending = Vec::new();
        while let Some(update) = updates.recv().await {
            pending.push(update);
        }

        let state = worker.await?;
        Ok((state, pending))
    }
}

async fn run_worker(
    mut state: EditorState,
    send_request: SendRequest,
    picker: Arc<dyn CertificatePicker>,
    mut cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
) -> EditorState {
    let mut in_flight = JoinSet::new();

    while let Some(command) = cmd_rx.recv().await {
        match command {
            UiCommand::Edit(edit) => {
                let before = state.validation_errors.clone();
                state.apply(edit);
                if state.validation_errors != before {
                    let _ = update_tx.send(UiUpdate::ValidationErrors(
                        state.validation_errors.clone(),
                    ));
                }
            }

            UiCommand::PickCertificate(slot) => {
                let picker = Arc::clone(&picker);
                match tokio::task::spawn_blocking(move || picker.pick(slot)).await {
                    Ok(Some(path)) => state.apply(EditorCommand::SetCertificate { slot, path }),
                    Ok(None) => {}
                    Err(e) => tracing::warn!(error = %e, ?slot, "certificate dialog failed"),
                }
            }

            UiCommand::Send => {
                if !send_request.is_available() {
                    let outcome = send_request.send(&state.draft()).await.to_request_state();
                    let _ = update_tx.send(UiUpdate::Response(outcome));
                    continue;
                }

                match send_request.prepare(&state.draft()) {
                    Ok(descriptor) => {
                        let _ = update_tx.send(UiUpdate::Loading);
                        let send_request = send_request.clone();
                        let tx = update_tx.clone();
                        in_flight.spawn(async move {
                            let result = send_request.execute(&descriptor).await;
                            let _ = tx.send(UiUpdate::Response(result.to_request_state()));
                        });
                    }
                    Err(error) => {
                        if let SendError::Build(BuildError::Headers(errors)) = &error {
                            state.validation_errors.clone_from(errors);
                            let _ = update_tx.send(UiUpdate::ValidationErrors(errors.clone()));
                        }
                        let _ = update_tx.send(UiUpdate::Response(RequestState::error(
                            error.display_line(),
                        )));
                    }
                }
            }
        }
    }

    while in_flight.join_next().await.is_some() {}
    state
}
