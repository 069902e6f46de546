//! Grid view model
//!
//! Turns the canonical [`Table`] into what a surface draws:
//! - a read-only header row taken from table row 0
//! - editable body rows for table rows 1.., at grid index `row - 1`
//! - a placeholder message when there is nothing to show
//!
//! Column count comes from the header. Short data rows are not padded; a
//! surface must only draw the cells a row actually has.

use super::model::{CellPosition, Table};

/// Shown instead of a grid when the table has no rows
pub const EMPTY_PLACEHOLDER: &str = "Enter CSV data on the left to see the table here.";

/// Column width used when no width is known for a column
pub const FALLBACK_COLUMN_WIDTH: f32 = 92.0;

/// A header cell with its current width in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub col: usize,
    pub text: String,
    pub width: f32,
}

/// A body cell, addressed in table coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub position: CellPosition,
    pub text: String,
    /// Width of the cell's column in pixels
    pub width: f32,
}

impl GridCell {
    pub fn is_editable(&self) -> bool {
        !self.position.is_header()
    }
}

/// One rendered body row
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// Index of the source row in the table (always >= 1)
    pub table_row: usize,
    pub cells: Vec<GridCell>,
}

impl GridRow {
    /// Index of this row among the body rows
    pub fn grid_index(&self) -> usize {
        self.table_row - 1
    }
}

/// Everything a surface needs to draw the grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    /// No rows at all
    Placeholder(&'static str),
    Grid {
        header: Vec<HeaderCell>,
        body: Vec<GridRow>,
    },
}

impl GridView {
    /// Build the view for `table`, using `column_widths` (pixels) where known
    pub fn build(table: &Table, column_widths: &[f32]) -> Self {
        let Some(header_row) = table.header() else {
            return GridView::Placeholder(EMPTY_PLACEHOLDER);
        };

        let header = header_row
            .iter()
            .enumerate()
            .map(|(col, text)| HeaderCell {
                col,
                text: text.clone(),
                width: column_width(column_widths, col),
            })
            .collect();

        let body = table
            .data_rows()
            .map(|(table_row, cells)| GridRow {
                table_row,
                cells: cells
                    .iter()
                    .enumerate()
                    .map(|(col, text)| GridCell {
                        position: CellPosition::new(table_row, col),
                        text: text.clone(),
                        width: column_width(column_widths, col),
                    })
                    .collect(),
            })
            .collect();

        GridView::Grid { header, body }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, GridView::Placeholder(_))
    }

    /// Number of header columns
    pub fn column_count(&self) -> usize {
        match self {
            GridView::Placeholder(_) => 0,
            GridView::Grid { header, .. } => header.len(),
        }
    }

    pub fn header(&self) -> &[HeaderCell] {
        match self {
            GridView::Placeholder(_) => &[],
            GridView::Grid { header, .. } => header,
        }
    }

    pub fn body(&self) -> &[GridRow] {
        match self {
            GridView::Placeholder(_) => &[],
            GridView::Grid { body, .. } => body,
        }
    }

    /// Look up a body cell by grid coordinates
    pub fn body_cell(&self, grid_row: usize, col: usize) -> Option<&GridCell> {
        self.body().get(grid_row)?.cells.get(col)
    }
}

/// Width of `col`, falling back when the column has no recorded width
pub fn column_width(widths: &[f32], col: usize) -> f32 {
    widths.get(col).copied().unwrap_or(FALLBACK_COLUMN_WIDTH)
}

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Single-line form of a cell value (line breaks shown as `↵`)
pub fn display_text(s: &str) -> String {
    s.replace("\r\n", "↵").replace(['\n', '\r'], "↵")
}
