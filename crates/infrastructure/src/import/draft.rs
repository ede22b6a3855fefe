//! Request draft files.
//!
//! A draft file holds the same fields as the editor: method, url,
//! params, headers, auth, body, tls and the script texts.
//!
//! ```yaml
//! method: POST
//! url: https://example.com/api
//! params:
//!   - { key: q, value: test }
//! body:
//!   content_type: raw
//!   raw_body: '{"a":1}'
//! ```

use std::path::Path;

use courier_domain::request::RequestDraft;
use thiserror::Error;

use crate::serialization::{SerializationError, from_json, from_yaml};

/// Errors while loading a draft file.
#[derive(Debug, Error)]
pub enum DraftFileError {
    /// The file could not be read.
    #[error("Failed to read draft file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid draft.
    #[error("Invalid draft file: {0}")]
    Parse(#[from] SerializationError),

    /// The file extension is neither JSON nor YAML.
    #[error("Unsupported draft file extension: {0}")]
    UnsupportedFormat(String),
}

/// Encoding of a draft file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl DraftFormat {
    /// Detects the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`DraftFileError::UnsupportedFormat`] for other extensions.
    pub fn from_path(path: &Path) -> Result<Self, DraftFileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(DraftFileError::UnsupportedFormat(extension)),
        }
    }
}

/// Parses draft text in the given format.
///
/// # Errors
///
/// Returns an error if the content is not a valid draft.
pub fn parse_draft(content: &str, format: DraftFormat) -> Result<RequestDraft, DraftFileError> {
    let draft = match format {
        DraftFormat::Json => from_json(content)?,
        DraftFormat::Yaml => from_yaml(content)?,
    };
    Ok(draft)
}

/// Loads a draft file, choosing the format by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown
/// extension, or does not contain a valid draft.
pub async fn load_draft(path: &Path) -> Result<RequestDraft, DraftFileError> {
    let format = DraftFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;
    tracing::debug!(path = %path.display(), ?format, "loading draft file");
    parse_draft(&content, format)
}
