//! Sync coordinator - owner of the canonical table
//!
//! The table is the single source of truth shared by the text and the grid:
//! - a full text edit decodes into a new table and asks for a grid render
//! - a cell edit mutates the table in place and publishes re-encoded text
//!
//! Both operations run to completion; `Syncing` is only observable from
//! inside one of them.

use tracing::debug;

use super::document::Document;
use crate::commands::Cmd;
use crate::csv::{decode, encode, CellPosition, Table};

/// Whether the coordinator is in the middle of an operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    /// Table, text and rendered grid agree
    #[default]
    Idle,
    /// A text change or cell edit is being applied
    Syncing,
}

/// Owns the canonical table and the text derived from it
#[derive(Debug, Clone, Default)]
pub struct SyncCoordinator {
    table: Table,
    document: Document,
    state: SyncState,
}

impl SyncCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Current canonical CSV text
    pub fn text(&self) -> String {
        self.document.text()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// The text surface changed: replace the table wholesale and re-render.
    ///
    /// This is the only operation that changes the row or column count.
    pub fn on_full_text_change(&mut self, text: &str) -> Cmd {
        self.begin();

        self.table = decode(text);
        self.document.replace_text(text);
        debug!(
            rows = self.table.row_count(),
            columns = self.table.column_count(),
            revision = self.document.revision,
            "decoded text into table"
        );

        self.finish();
        Cmd::RenderGrid
    }

    /// Same as a full text change, for content freshly read from `path`
    pub fn load_file(&mut self, text: &str, path: std::path::PathBuf) -> Cmd {
        let cmd = self.on_full_text_change(text);
        self.document.load(text, path);
        cmd
    }

    /// A grid cell changed: update it in place and publish re-encoded text.
    ///
    /// Edits addressing a missing row, or a column missing from that row, are
    /// ignored without touching the table or the text. The grid is not
    /// re-rendered since it already shows the typed value.
    pub fn on_cell_edit(&mut self, row: usize, col: usize, value: &str) -> Option<Cmd> {
        if !self.table.contains(CellPosition::new(row, col)) {
            return None;
        }

        self.begin();

        let previous = self.table.set(row, col, value);
        let text = encode(&self.table);
        self.document.replace_text(&text);
        debug!(row, col, old = ?previous, new = %value, "cell edited");

        self.finish();
        Some(Cmd::PublishText(text))
    }

    fn begin(&mut self) {
        debug_assert_eq!(self.state, SyncState::Idle, "sync operations do not nest");
        self.state = SyncState::Syncing;
    }

    fn finish(&mut self) {
        self.state = SyncState::Idle;
    }
}
