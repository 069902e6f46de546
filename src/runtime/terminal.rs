//! Terminal surface
//!
//! Draws the grid as a box of fixed-width columns. Column widths arrive in
//! pixels and are converted to character cells with the configured
//! character width.

use std::io::Write;

use tracing::warn;

use super::Surface;
use crate::csv::render::{
    column_width, display_text, is_number, truncate_text, FALLBACK_COLUMN_WIDTH,
};
use crate::csv::GridView;

/// Widest a column is ever drawn, in characters
pub const MAX_CELL_CHARS: usize = 200;

/// Character cells available for a column `width` pixels wide
///
/// Non-finite widths fall back to [`FALLBACK_COLUMN_WIDTH`]. The result is
/// always between 1 and [`MAX_CELL_CHARS`].
pub fn cell_chars(width: f32, char_width: f32) -> usize {
    if !(char_width > 0.0 && char_width.is_finite()) {
        return 1;
    }
    let width = if width.is_finite() {
        width
    } else {
        FALLBACK_COLUMN_WIDTH
    };
    let chars = (width / char_width).floor().clamp(1.0, MAX_CELL_CHARS as f32);
    chars as usize
}

/// Draw `view` as text
///
/// Each line starts with the table row index so cells can be addressed by
/// typed commands. Rows shorter than the header end early; longer rows keep
/// their extra cells, drawn at their own column widths.
pub fn draw_grid(view: &GridView, char_width: f32) -> String {
    let (header, body) = match view {
        GridView::Placeholder(message) => return format!("{}\n", message),
        GridView::Grid { header, body } => (header, body),
    };

    let widths: Vec<f32> = header.iter().map(|h| h.width).collect();
    let chars_for = |col: usize| cell_chars(column_width(&widths, col), char_width);
    let label_width = body.last().map_or(1, |r| r.table_row.to_string().len());

    let mut out = String::new();
    let header_cells: Vec<String> = header
        .iter()
        .map(|h| pad(&h.text, chars_for(h.col), false))
        .collect();
    push_line(&mut out, &format!("{:>w$}", 0, w = label_width), &header_cells);

    let rule: Vec<String> = header.iter().map(|h| "-".repeat(chars_for(h.col))).collect();
    push_line(&mut out, &" ".repeat(label_width), &rule);

    for row in body {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                let col = cell.position.col;
                let chars = if col < header.len() {
                    chars_for(col)
                } else {
                    cell_chars(cell.width, char_width)
                };
                pad(&cell.text, chars, is_number(&cell.text))
            })
            .collect();
        let label = format!("{:>w$}", row.table_row, w = label_width);
        push_line(&mut out, &label, &cells);
    }

    out
}

fn pad(text: &str, chars: usize, right_align: bool) -> String {
    let shown = truncate_text(&display_text(text), chars);
    if right_align {
        format!("{:>w$}", shown, w = chars)
    } else {
        format!("{:<w$}", shown, w = chars)
    }
}

fn push_line(out: &mut String, label: &str, cells: &[String]) {
    out.push_str(label);
    out.push_str(" |");
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// [`Surface`] writing to a terminal (or any writer)
pub struct TextGridRenderer<W: Write> {
    out: W,
    char_width: f32,
    last_view: Option<GridView>,
}

impl<W: Write> TextGridRenderer<W> {
    pub fn new(out: W, char_width: f32) -> Self {
        Self {
            out,
            char_width,
            last_view: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn draw_last_view(&mut self) {
        if let Some(view) = &self.last_view {
            let text = draw_grid(view, self.char_width);
            self.write(&text);
        }
    }
}

impl<W: Write> Surface for TextGridRenderer<W> {
    fn render_grid(&mut self, view: &GridView) {
        self.last_view = Some(view.clone());
        self.draw_last_view();
    }

    fn publish_text(&mut self, text: &str) {
        self.write(&format!("--- text ---\n{}\n------------\n", text));
    }

    fn resize_column(&mut self, col: usize, width: f32) {
        if let Some(GridView::Grid { header, .. }) = &mut self.last_view {
            if let Some(cell) = header.get_mut(col) {
                cell.width = width;
            }
        }
        self.draw_last_view();
    }

    fn resize_panels(&mut self, left: f32, right: f32) {
        self.write(&format!("panels: text {}px | grid {}px\n", left, right));
    }

    fn show_status(&mut self, message: &str) {
        self.write(&format!("{}\n", message));
    }
}
