//! CSV data model types
//!
//! A [`Table`] is a list of rows, each a list of string cells. Row 0 is the
//! header by convention. Rows are not required to have the same length.

use serde::Serialize;

/// A single row of cells
pub type Row = Vec<String>;

/// Position of a cell in the table (table coordinates, header is row 0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Header cells are rendered read-only
    pub fn is_header(&self) -> bool {
        self.row == 0
    }
}

/// Row/column table decoded from CSV text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from already split rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header row, if the table has any rows
    pub fn header(&self) -> Option<&[String]> {
        self.row(0)
    }

    /// Number of columns as defined by the header row
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }

    /// Widest row length, which can exceed the header on ragged input
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Data rows with their table indices (header excluded)
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, row)| (i, row.as_slice()))
    }

    /// Get a cell value. Returns `None` when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Whether `pos` addresses a cell that exists in this table
    pub fn contains(&self, pos: CellPosition) -> bool {
        self.get(pos.row, pos.col).is_some()
    }

    /// Replace an existing cell value in place.
    ///
    /// Never grows the table: returns `None` if the row or the column within
    /// that row does not exist, otherwise the previous value.
    pub fn set(&mut self, row: usize, col: usize, value: &str) -> Option<String> {
        let cell = self.rows.get_mut(row)?.get_mut(col)?;
        Some(std::mem::replace(cell, value.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Clipboard content offered to a cell paste
///
/// Only the plain text flavor is ever inserted. Rich text is accepted so that
/// hosts can forward the whole clipboard, but it is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastePayload {
    pub plain: Option<String>,
    pub html: Option<String>,
}

impl PastePayload {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain: Some(text.into()),
            html: None,
        }
    }

    /// The text to insert, if the payload carries a plain text flavor
    pub fn text(&self) -> Option<&str> {
        self.plain.as_deref()
    }
}

/// State for editing a single cell
///
/// Tracks the value being typed and a caret (in characters) so that pasted
/// text lands where the user is typing.
#[derive(Debug, Clone)]
pub struct CellEditState {
    /// Position of the cell being edited
    pub position: CellPosition,
    /// Current content
    buffer: String,
    /// Caret position in characters
    caret: usize,
}

impl CellEditState {
    /// Start editing a cell with the caret at the end
    pub fn new(position: CellPosition, value: String) -> Self {
        Self {
            position,
            caret: value.chars().count(),
            buffer: value,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the caret, clamped to the buffer length
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.buffer.chars().count());
    }

    /// Replace the whole value (typed input), caret moves to the end
    pub fn set_value(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.caret = self.buffer.chars().count();
    }

    /// Insert text at the caret and move the caret past it
    pub fn insert_text(&mut self, text: &str) {
        let byte_idx = self
            .buffer
            .char_indices()
            .nth(self.caret)
            .map_or(self.buffer.len(), |(i, _)| i);
        self.buffer.insert_str(byte_idx, text);
        self.caret += text.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(vec![
            vec!["name".to_string(), "age".to_string()],
            vec!["Alice".to_string(), "30".to_string()],
            vec!["Bob".to_string()],
        ])
    }

    #[test]
    fn test_table_get() {
        let table = sample();

        assert_eq!(table.get(0, 0), Some("name"));
        assert_eq!(table.get(1, 1), Some("30"));
        assert_eq!(table.get(2, 1), None);
        assert_eq!(table.get(5, 0), None);
    }

    #[test]
    fn test_table_shape() {
        let table = sample();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.max_row_len(), 2);
        assert_eq!(Table::new().column_count(), 0);
    }

    #[test]
    fn test_table_set_existing_cell() {
        let mut table = sample();

        assert_eq!(table.set(1, 0, "Carol"), Some("Alice".to_string()));
        assert_eq!(table.get(1, 0), Some("Carol"));
    }

    #[test]
    fn test_table_set_never_grows() {
        let mut table = sample();
        let before = table.clone();

        assert_eq!(table.set(2, 1, "x"), None);
        assert_eq!(table.set(9, 0, "x"), None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_data_rows_skip_header() {
        let table = sample();
        let indices: Vec<usize> = table.data_rows().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_table_serializes_as_nested_arrays() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"[["name","age"],["Alice","30"],["Bob"]]"#);
    }

    #[test]
    fn test_cell_edit_state_caret_starts_at_end() {
        let edit = CellEditState::new(CellPosition::new(1, 0), "héllo".to_string());

        assert_eq!(edit.caret(), 5);
        assert_eq!(edit.buffer(), "héllo");
    }

    #[test]
    fn test_cell_edit_state_insert_at_caret() {
        let mut edit = CellEditState::new(CellPosition::new(1, 0), "héllo".to_string());
        edit.set_caret(2);
        edit.insert_text("XY");

        assert_eq!(edit.buffer(), "héXYllo");
        assert_eq!(edit.caret(), 4);
    }

    #[test]
    fn test_cell_edit_state_set_value() {
        let mut edit = CellEditState::new(CellPosition::new(1, 0), "abc".to_string());
        edit.set_value("z");
        edit.insert_text("!");

        assert_eq!(edit.buffer(), "z!");
        edit.set_caret(100);
        assert_eq!(edit.caret(), 2);
    }

    #[test]
    fn test_paste_payload_prefers_plain() {
        let payload = PastePayload {
            plain: Some("text".to_string()),
            html: Some("<b>text</b>".to_string()),
        };
        assert_eq!(payload.text(), Some("text"));

        let html_only = PastePayload {
            plain: None,
            html: Some("<b>x</b>".to_string()),
        };
        assert_eq!(html_only.text(), None);
    }
}
