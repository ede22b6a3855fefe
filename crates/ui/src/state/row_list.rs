//! Editable row lists for params and headers.

use courier_domain::RowId;
use courier_domain::request::FieldRow;

/// A single change to one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEdit {
    /// New key text.
    Key(String),
    /// New value text.
    Value(String),
    /// New enabled flag.
    Enabled(bool),
}

/// Ordered rows as shown in the editor.
///
/// The list always ends with an empty placeholder row. Filling the
/// placeholder's key appends a fresh one. Rows are addressed by their
/// [`RowId`] so edits stay attached to the right row across removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<FieldRow>,
}

impl Default for RowList {
    fn default() -> Self {
        Self::new()
    }
}

impl RowList {
    /// Creates a list holding only the placeholder row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![FieldRow::empty()],
        }
    }

    /// Creates a list from existing rows, adding the placeholder.
    #[must_use]
    pub fn from_rows(rows: Vec<FieldRow>) -> Self {
        let mut list = Self { rows };
        list.ensure_placeholder();
        list
    }

    /// All rows, placeholder included.
    #[must_use]
    pub fn rows(&self) -> &[FieldRow] {
        &self.rows
    }

    /// Rows without the trailing placeholder.
    #[must_use]
    pub fn entries(&self) -> &[FieldRow] {
        match self.rows.split_last() {
            Some((last, rest)) if last.is_blank() => rest,
            _ => &self.rows,
        }
    }

    /// Number of rows, placeholder included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the list holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row with the given id.
    #[must_use]
    pub fn get(&self, id: RowId) -> Option<&FieldRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Id of the trailing placeholder.
    #[must_use]
    pub fn placeholder_id(&self) -> Option<RowId> {
        self.rows.last().filter(|row| row.is_blank()).map(|row| row.id)
    }

    /// Applies an edit to the row with `id`.
    ///
    /// Returns false if no such row exists.
    pub fn edit(&mut self, id: RowId, edit: RowEdit) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        match edit {
            RowEdit::Key(key) => row.key = key,
            RowEdit::Value(value) => row.value = value,
            RowEdit::Enabled(enabled) => row.enabled = enabled,
        }
        self.ensure_placeholder();
        true
    }

    /// Adds a row, filling the placeholder if it is entirely empty.
    pub fn append(&mut self, row: FieldRow) {
        match self.rows.last_mut() {
            Some(last) if last.is_blank() => *last = row,
            _ => self.rows.push(row),
        }
        self.ensure_placeholder();
    }

    /// Removes the row with `id`.
    ///
    /// Returns false if no such row exists.
    pub fn remove(&mut self, id: RowId) -> bool {
        let Some(index) = self.rows.iter().position(|row| row.id == id) else {
            return false;
        };
        self.rows.remove(index);
        self.ensure_placeholder();
        true
    }

    /// Copies the rows without the placeholder.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FieldRow> {
        self.entries().to_vec()
    }

    fn ensure_placeholder(&mut self) {
        if self.rows.last().is_none_or(|row| !row.key.is_empty()) {
            self.rows.push(FieldRow::empty());
        }
    }
}
