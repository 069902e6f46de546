//! CSV codec and grid model
//!
//! Provides the two data-side halves of the text/grid sync:
//! - `codec`: CSV text <-> [`Table`] conversion
//! - `render`: [`Table`] -> [`GridView`] for surfaces to draw
//!
//! # Architecture
//!
//! ```text
//! text ──decode──> Table ──GridView::build──> surface
//!   ^                │
//!   └────encode──────┘  (after a cell edit)
//! ```

mod codec;
mod model;
pub mod render;

pub use codec::{decode, encode, encode_rows, escape_cell, needs_quotes};
pub use model::{CellEditState, CellPosition, PastePayload, Row, Table};
pub use render::{GridCell, GridRow, GridView, HeaderCell};
