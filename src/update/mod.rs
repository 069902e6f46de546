//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod grid;
mod resize;
mod text;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::TableSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use grid::update_grid;
pub use resize::update_resize;
pub use text::update_text;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Text(m) => text::update_text(model, m),
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Resize(m) => resize::update_resize(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures the table shape before and after and logs what changed.
/// Pointer moves during a drag are too frequent to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::ResizeMsg;

    let is_noisy = matches!(&msg, Msg::Resize(ResizeMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = snapshot(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = snapshot(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "table", %diff, "state changed");
    }
    if !is_noisy {
        debug!(target: "message", cmd = ?result, "produced");
    }

    result
}

#[cfg(debug_assertions)]
fn snapshot(model: &AppModel) -> TableSnapshot {
    TableSnapshot::capture(model.sync.table(), model.sync.document().buffer.len_bytes())
}

/// Get a display name for a message type
///
/// Cell values and file contents are left out; they can be large.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, GridMsg, TextMsg};

    match msg {
        Msg::Text(TextMsg::Changed(text)) => format!("Text::Changed({}b)", text.len()),
        Msg::Grid(GridMsg::Input { row, col, .. }) => format!("Grid::Input({}, {})", row, col),
        Msg::Grid(GridMsg::Paste { row, col, .. }) => format!("Grid::Paste({}, {})", row, col),
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Resize(m) => format!("Resize::{:?}", m),
        Msg::App(AppMsg::FileLoaded { path, .. }) => {
            format!("App::FileLoaded({})", path.display())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}
