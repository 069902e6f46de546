//! Panel and column sizes
//!
//! Column widths are derived from content whenever the table is decoded
//! from text, then adjusted by column drags until the next decode.

use super::drag::{ColumnConstraints, PanelConstraints};
use crate::config::AppConfig;
use crate::csv::render::column_width;
use crate::csv::Table;

/// Narrowest content-derived column, in characters
const MIN_COLUMN_CHARS: usize = 4;
/// Only this many rows are sampled when sizing columns
const WIDTH_SAMPLE_ROWS: usize = 100;

/// Current sizes of everything the user can resize
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub container_width: f32,
    pub separator_width: f32,
    pub left_panel_width: f32,
    pub right_panel_width: f32,
    /// Column widths in pixels, indexed by column
    pub column_widths: Vec<f32>,
}

impl LayoutState {
    /// Even split of the container between text and grid
    pub fn new(config: &AppConfig) -> Self {
        let mut layout = Self {
            container_width: config.container_width,
            separator_width: config.separator_width,
            left_panel_width: 0.0,
            right_panel_width: 0.0,
            column_widths: Vec::new(),
        };
        let half = (config.container_width - config.separator_width) / 2.0;
        layout.set_left_panel_width(layout.panel_constraints(config).clamp_left(half), config);
        layout
    }

    pub fn panel_constraints(&self, config: &AppConfig) -> PanelConstraints {
        PanelConstraints {
            min_left: config.min_panel_width,
            min_right: config.min_right_panel_width,
            container_width: self.container_width,
            separator_width: self.separator_width,
        }
    }

    pub fn column_constraints(&self, config: &AppConfig) -> ColumnConstraints {
        ColumnConstraints {
            min_width: config.min_column_width,
        }
    }

    /// Set the left panel width; the right panel takes what remains
    pub fn set_left_panel_width(&mut self, left: f32, config: &AppConfig) {
        self.left_panel_width = left;
        self.right_panel_width = self.panel_constraints(config).right_for(left);
    }

    /// Change the container width, keeping the left panel within limits
    pub fn set_container_width(&mut self, width: f32, config: &AppConfig) {
        self.container_width = width;
        let left = self
            .panel_constraints(config)
            .clamp_left(self.left_panel_width);
        self.set_left_panel_width(left, config);
    }

    pub fn column_width(&self, col: usize) -> f32 {
        column_width(&self.column_widths, col)
    }

    /// Set a column width, ignoring columns the layout does not know
    pub fn set_column_width(&mut self, col: usize, width: f32) -> bool {
        match self.column_widths.get_mut(col) {
            Some(w) => {
                *w = width;
                true
            }
            None => false,
        }
    }

    /// Recompute column widths from table content
    pub fn reset_column_widths(&mut self, table: &Table, config: &AppConfig) {
        self.column_widths = content_column_widths(table, config);
    }
}

/// Column widths (pixels) sized to fit the content of the first rows
pub fn content_column_widths(table: &Table, config: &AppConfig) -> Vec<f32> {
    let max_chars = config.max_column_chars.max(MIN_COLUMN_CHARS);
    let mut widths = vec![MIN_COLUMN_CHARS; table.max_row_len()];

    for row in table.rows().iter().take(WIDTH_SAMPLE_ROWS) {
        for (col, cell) in row.iter().enumerate() {
            let longest_line = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            widths[col] = widths[col].max(longest_line.min(max_chars));
        }
    }

    widths
        .into_iter()
        .map(|chars| {
            (chars as f32 * config.char_width + config.cell_padding).max(config.min_column_width)
        })
        .collect()
}
