//! UI state for the request editor.

use std::path::PathBuf;

use courier_application::validate_headers;
use courier_domain::auth::{AuthMode, AuthSetting};
use courier_domain::request::{BodySetting, ContentTypeChoice, FieldRow, HttpMethod, RequestDraft};
use courier_domain::tls::{CertificateSlot, TlsOptions, TlsSecurityWarning};
use courier_domain::{RowId, ValidationError};

use super::row_list::{RowEdit, RowList};
use crate::suggestions::HeaderSuggestion;

/// A user edit to the request editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Method selector changed.
    SetMethod(HttpMethod),
    /// URL field changed.
    SetUrl(String),
    /// A query parameter row changed.
    EditParam {
        /// Row to change.
        id: RowId,
        /// The change.
        edit: RowEdit,
    },
    /// The whole query parameter list was replaced.
    SetParams(Vec<FieldRow>),
    /// A query parameter row was added.
    AddParam(FieldRow),
    /// A query parameter row was deleted.
    RemoveParam(RowId),
    /// A header row changed.
    EditHeader {
        /// Row to change.
        id: RowId,
        /// The change.
        edit: RowEdit,
    },
    /// The whole header list was replaced.
    SetHeaders(Vec<FieldRow>),
    /// A header row was added.
    AddHeader(FieldRow),
    /// A header row was deleted.
    RemoveHeader(RowId),
    /// A header preset was picked.
    ApplySuggestion(HeaderSuggestion),
    /// Auth mode selector changed.
    SetAuthMode(AuthMode),
    /// Bearer token field changed.
    SetBearerToken(String),
    /// Body content type selector changed.
    SetContentType(ContentTypeChoice),
    /// Body text changed.
    SetRawBody(String),
    /// A certificate file was chosen.
    SetCertificate {
        /// Which TLS field receives the path.
        slot: CertificateSlot,
        /// Chosen file.
        path: PathBuf,
    },
    /// Certificate verification toggle changed.
    SetSkipVerification(bool),
    /// Pre-request script text changed.
    SetPreRequestScript(String),
    /// Test script text changed.
    SetTestScript(String),
}

impl EditorCommand {
    /// Commands that reproduce `draft` on a fresh editor.
    #[must_use]
    pub fn replay(draft: &RequestDraft) -> Vec<Self> {
        let mut commands = vec![Self::SetMethod(draft.method), Self::SetUrl(draft.url.clone())];
        commands.push(Self::SetParams(draft.params.clone()));
        commands.push(Self::SetHeaders(draft.headers.clone()));
        commands.push(Self::SetAuthMode(draft.auth.mode));
        commands.push(Self::SetBearerToken(draft.auth.token.clone()));
        commands.push(Self::SetContentType(draft.body.content_type));
        commands.push(Self::SetRawBody(draft.body.raw_body.clone()));

        let tls = &draft.tls;
        let slots = [
            (CertificateSlot::Certificate, &tls.cert_path),
            (CertificateSlot::PrivateKey, &tls.key_path),
            (CertificateSlot::CaCertificate, &tls.ca_path),
        ];
        for (slot, path) in slots {
            if let Some(path) = path {
                commands.push(Self::SetCertificate {
                    slot,
                    path: path.clone(),
                });
            }
        }
        commands.push(Self::SetSkipVerification(tls.skip_verification));

        commands.push(Self::SetPreRequestScript(draft.pre_request_script.clone()));
        commands.push(Self::SetTestScript(draft.test_script.clone()));
        commands
    }

    const fn touches_headers(&self) -> bool {
        matches!(
            self,
            Self::EditHeader { .. }
                | Self::SetHeaders(_)
                | Self::AddHeader(_)
                | Self::RemoveHeader(_)
                | Self::ApplySuggestion(_)
        )
    }
}

/// Everything the request editor shows.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Selected method.
    pub method: HttpMethod,
    /// URL as typed.
    pub url: String,
    /// Query parameter rows.
    pub params: RowList,
    /// Header rows.
    pub headers: RowList,
    /// Authorization tab.
    pub auth: AuthSetting,
    /// Body tab.
    pub body: BodySetting,
    /// Certificate options.
    pub tls: TlsOptions,
    /// Pre-request script text.
    pub pre_request_script: String,
    /// Test script text.
    pub test_script: String,
    /// Header problems shown under the header editor.
    pub validation_errors: Vec<ValidationError>,
}

impl EditorState {
    /// Creates an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor showing `draft`.
    #[must_use]
    pub fn from_draft(draft: &RequestDraft) -> Self {
        let mut state = Self::new();
        for command in EditorCommand::replay(draft) {
            state.apply(command);
        }
        state
    }

    /// Applies one edit.
    ///
    /// Header edits re-run header validation so problems show while typing.
    pub fn apply(&mut self, command: EditorCommand) {
        let revalidate = command.touches_headers();

        match command {
            EditorCommand::SetMethod(method) => self.method = method,
            EditorCommand::SetUrl(url) => self.url = url,
            EditorCommand::EditParam { id, edit } => {
                self.params.edit(id, edit);
            }
            EditorCommand::SetParams(rows) => self.params = RowList::from_rows(rows),
            EditorCommand::AddParam(row) => self.params.append(row),
            EditorCommand::RemoveParam(id) => {
                self.params.remove(id);
            }
            EditorCommand::EditHeader { id, edit } => {
                self.headers.edit(id, edit);
            }
            EditorCommand::SetHeaders(rows) => self.headers = RowList::from_rows(rows),
            EditorCommand::AddHeader(row) => self.headers.append(row),
            EditorCommand::RemoveHeader(id) => {
                self.headers.remove(id);
            }
            EditorCommand::ApplySuggestion(suggestion) => self.headers.append(suggestion.to_row()),
            EditorCommand::SetAuthMode(mode) => self.auth.mode = mode,
            EditorCommand::SetBearerToken(token) => self.auth.token = token,
            EditorCommand::SetContentType(content_type) => self.body.content_type = content_type,
            EditorCommand::SetRawBody(raw_body) => self.body.raw_body = raw_body,
            EditorCommand::SetCertificate { slot, path } => self.tls.set(slot, path),
            EditorCommand::SetSkipVerification(skip) => self.tls.skip_verification = skip,
            EditorCommand::SetPreRequestScript(script) => self.pre_request_script = script,
            EditorCommand::SetTestScript(script) => self.test_script = script,
        }

        if revalidate {
            self.validation_errors = validate_headers(self.headers.rows());
        }
    }

    /// Snapshot of the editor for one send.
    #[must_use]
    pub fn draft(&self) -> RequestDraft {
        RequestDraft {
            method: self.method,
            url: self.url.clone(),
            params: self.params.snapshot(),
            headers: self.headers.snapshot(),
            auth: self.auth.clone(),
            body: self.body.clone(),
            tls: self.tls.clone(),
            pre_request_script: self.pre_request_script.clone(),
            test_script: self.test_script.clone(),
        }
    }

    /// Insecure TLS choices to flag next to the certificate fields.
    #[must_use]
    pub fn security_warnings(&self) -> Vec<TlsSecurityWarning> {
        self.tls.security_warnings()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::suggestions::HEADER_SUGGESTIONS;
    use pretty_assertions::assert_eq;

    fn placeholder_header(state: &EditorState) -> RowId {
        state.headers.placeholder_id().unwrap()
    }

    #[test]
    fn test_new_editor_has_placeholder_rows() {
        let state = EditorState::new();
        assert_eq!(state.method, HttpMethod::Get);
        assert_eq!(state.params.len(), 1);
        assert_eq!(state.headers.len(), 1);
        assert!(state.validation_errors.is_empty());
    }

    #[test]
    fn test_header_typing_validates_live() {
        let mut state = EditorState::new();
        let id = placeholder_header(&state);

        state.apply(EditorCommand::EditHeader {
            id,
            edit: RowEdit::Key("Host".to_string()),
        });
        assert_eq!(state.validation_errors.len(), 2);

        state.apply(EditorCommand::EditHeader {
            id,
            edit: RowEdit::Value("example.com".to_string()),
        });
        assert_eq!(
            state.validation_errors,
            vec![ValidationError::new(
                r#"Header "Host" is reserved and cannot be modified"#
            )]
        );

        state.apply(EditorCommand::EditHeader {
            id,
            edit: RowEdit::Enabled(false),
        });
        assert!(state.validation_errors.is_empty());
    }

    #[test]
    fn test_suggestion_fills_placeholder() {
        let mut state = EditorState::new();

        state.apply(EditorCommand::ApplySuggestion(HEADER_SUGGESTIONS[2]));

        assert_eq!(state.headers.len(), 2);
        assert_eq!(state.headers.rows()[0].key, "Accept-Language");
        assert!(state.headers.rows()[1].is_blank());
    }

    #[test]
    fn test_same_suggestion_twice_is_a_duplicate() {
        let mut state = EditorState::new();

        state.apply(EditorCommand::ApplySuggestion(HEADER_SUGGESTIONS[0]));
        state.apply(EditorCommand::ApplySuggestion(HEADER_SUGGESTIONS[1]));

        assert_eq!(
            state.validation_errors,
            vec![
                ValidationError::new("Duplicate header key: Accept"),
                ValidationError::new("Duplicate header key: Accept"),
            ]
        );
    }

    #[test]
    fn test_draft_excludes_placeholders() {
        let mut state = EditorState::new();
        state.apply(EditorCommand::SetUrl("https://example.com".to_string()));
        state.apply(EditorCommand::AddParam(FieldRow::new("q", "1")));

        let draft = state.draft();

        assert_eq!(draft.url, "https://example.com");
        assert_eq!(draft.params.len(), 1);
        assert!(draft.headers.is_empty());
    }

    #[test]
    fn test_replay_round_trips_draft() {
        let mut draft = RequestDraft::new(HttpMethod::Put, "https://example.com/items/1")
            .with_param(FieldRow::disabled("debug", "1"))
            .with_header(FieldRow::new("X-Id", "7"))
            .with_auth(AuthSetting::bearer("abc"))
            .with_body(BodySetting::raw("{}"));
        draft.tls.ca_path = Some(PathBuf::from("ca.pem"));
        draft.tls.skip_verification = true;
        draft.test_script = "expect(200)".to_string();

        let state = EditorState::from_draft(&draft);

        assert_eq!(state.draft(), draft);
        assert_eq!(
            state.security_warnings(),
            vec![TlsSecurityWarning::CertificateVerificationDisabled]
        );
    }

    #[test]
    fn test_replay_keeps_blank_rows_in_place() {
        let draft = RequestDraft::new(HttpMethod::Get, "https://example.com")
            .with_header(FieldRow::new("", ""))
            .with_header(FieldRow::new("", "orphan"));

        let state = EditorState::from_draft(&draft);

        assert_eq!(state.draft().headers, draft.headers);
        assert_eq!(
            state.validation_errors,
            vec![ValidationError::new("Header 2 has a value but no key")]
        );
    }

    #[test]
    fn test_replay_keeps_disabled_blank_param() {
        let draft = RequestDraft::new(HttpMethod::Get, "https://example.com")
            .with_param(FieldRow::disabled("", ""))
            .with_param(FieldRow::new("q", "1"));

        let state = EditorState::from_draft(&draft);

        assert_eq!(state.draft().params, draft.params);
    }

    #[test]
    fn test_certificate_slots() {
        let mut state = EditorState::new();
        state.apply(EditorCommand::SetCertificate {
            slot: CertificateSlot::Certificate,
            path: PathBuf::from("client.pem"),
        });
        assert_eq!(
            state.security_warnings(),
            vec![TlsSecurityWarning::IncompleteClientIdentity]
        );

        state.apply(EditorCommand::SetCertificate {
            slot: CertificateSlot::PrivateKey,
            path: PathBuf::from("client.key"),
        });
        assert!(state.security_warnings().is_empty());
        assert!(state.tls.client_identity().is_some());
    }
}
