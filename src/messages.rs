//! Message types for the Elm-style architecture
//!
//! Every input the session reacts to is one of these messages. They are
//! applied one at a time, in arrival order.

use std::path::PathBuf;

use crate::csv::PastePayload;

/// Messages from the text surface
#[derive(Debug, Clone, PartialEq)]
pub enum TextMsg {
    /// The whole CSV text was edited; carries the new content
    Changed(String),
}

/// Messages from the grid surface (table coordinates, header is row 0)
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// A body cell received focus
    Focus { row: usize, col: usize },
    /// A cell's content changed to `value`
    Input {
        row: usize,
        col: usize,
        value: String,
    },
    /// Clipboard content was pasted into a cell
    Paste {
        row: usize,
        col: usize,
        payload: PastePayload,
    },
    /// The focused cell lost focus
    Blur,
}

/// Drag-resize messages (pointer x positions in pixels)
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeMsg {
    /// Pointer pressed on the panel separator
    StartPanel { x: f64 },
    /// Pointer pressed on a column's resize handle
    StartColumn { col: usize, x: f64 },
    /// Pointer moved
    Move { x: f64 },
    /// Pointer released
    End,
    /// The container holding both panels changed width
    ContainerResized { width: f32 },
}

/// Application-level messages (file I/O, session control)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Load a file as the new CSV text
    LoadFile(PathBuf),
    /// File load completed (async result)
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Save the current text, to the given path or the loaded file's path
    SaveFile(Option<PathBuf>),
    /// File save completed (async result)
    SaveCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Redraw the grid
    ShowGrid,
    /// Re-publish the current text
    ShowText,
    /// Show the canonical table as JSON
    DumpJson,
    /// End the session
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Text(TextMsg),
    Grid(GridMsg),
    Resize(ResizeMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a full-text change message
    pub fn text_changed(text: impl Into<String>) -> Self {
        Msg::Text(TextMsg::Changed(text.into()))
    }

    /// Create a cell input message
    pub fn cell_input(row: usize, col: usize, value: impl Into<String>) -> Self {
        Msg::Grid(GridMsg::Input {
            row,
            col,
            value: value.into(),
        })
    }
}
