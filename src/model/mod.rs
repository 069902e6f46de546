//! Application model - the complete state of a sync session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod coordinator;
pub mod document;
pub mod drag;
pub mod layout;
pub mod ui;

pub use coordinator::{SyncCoordinator, SyncState};
pub use document::Document;
pub use drag::{
    ColumnConstraints, ColumnDrag, DragSession, DragState, DragUpdate, PanelConstraints, PanelDrag,
};
pub use layout::{content_column_widths, LayoutState};
pub use ui::UiState;

use crate::config::AppConfig;
use crate::csv::{CellEditState, GridView};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Canonical table and text
    pub sync: SyncCoordinator,
    /// Panel and column sizes
    pub layout: LayoutState,
    /// Panel or column drag in progress
    pub drag: DragState,
    /// Cell being edited in the grid (Some while a body cell has focus)
    pub editing: Option<CellEditState>,
    /// Status line and I/O flags
    pub ui: UiState,
    /// User preferences
    pub config: AppConfig,
}

impl AppModel {
    /// Create an empty model
    pub fn new(config: AppConfig) -> Self {
        Self {
            sync: SyncCoordinator::new(),
            layout: LayoutState::new(&config),
            drag: DragState::default(),
            editing: None,
            ui: UiState::new(),
            config,
        }
    }

    /// Build the grid surfaces draw from the canonical table
    pub fn grid_view(&self) -> GridView {
        GridView::build(self.sync.table(), &self.layout.column_widths)
    }

    /// Drop everything tied to the previous table after it was replaced
    pub(crate) fn table_replaced(&mut self) {
        self.editing = None;
        if matches!(self.drag, DragState::Dragging(DragSession::Column(_))) {
            self.drag.release();
        }
        self.layout
            .reset_column_widths(self.sync.table(), &self.config);
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
