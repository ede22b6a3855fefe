//! Courier UI - Presentation layer
//!
//! Holds the editor state shown by the request composer and the bridge
//! that runs sends on the Tokio runtime. Nothing here draws widgets.

pub mod bridge;
pub mod certificate_picker;
pub mod state;
pub mod suggestions;

pub use bridge::{BridgeError, UiBridge, UiCommand, UiUpdate};
pub use certificate_picker::RfdCertificatePicker;
pub use state::{EditorCommand, EditorState, RowEdit, RowList};
pub use suggestions::{HEADER_SUGGESTIONS, HeaderSuggestion};
