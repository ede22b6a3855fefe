//! Import Module
//!
//! Reads request drafts from JSON or YAML files.

mod draft;

pub use draft::{DraftFileError, DraftFormat, load_draft, parse_draft};
