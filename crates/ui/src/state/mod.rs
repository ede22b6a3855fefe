//! UI state.

mod editor_state;
mod row_list;

pub use editor_state::{EditorCommand, EditorState};
pub use row_list::{RowEdit, RowList};
