//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The session runtime executes them against its surface.

use std::path::PathBuf;

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Rebuild the grid from the canonical table and draw it
    RenderGrid,
    /// Replace the text surface content with new canonical CSV text
    PublishText(String),
    /// Apply a new width to one column (header and body cells)
    ResizeColumn { col: usize, width: f32 },
    /// Apply new widths to the text and grid panels
    ResizePanels { left: f32, right: f32 },
    /// Show a message in the status line
    SetStatus(String),
    /// Load file asynchronously
    LoadFile { path: PathBuf },
    /// Save file asynchronously
    SaveFile { path: PathBuf, content: String },
    /// End the session
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Cmd::SetStatus(message.into())
    }

    /// Check if this command redraws the grid
    pub fn needs_render(&self) -> bool {
        match self {
            Cmd::RenderGrid => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_render()),
            _ => false,
        }
    }

    /// Text published by this command, if any (last one wins in a batch)
    pub fn published_text(&self) -> Option<&str> {
        match self {
            Cmd::PublishText(text) => Some(text),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.published_text()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_render() {
        assert!(Cmd::RenderGrid.needs_render());
        assert!(!Cmd::PublishText("a".into()).needs_render());
        assert!(Cmd::batch(vec![Cmd::status("x"), Cmd::RenderGrid]).needs_render());
        assert!(!Cmd::None.needs_render());
    }

    #[test]
    fn test_published_text() {
        assert_eq!(Cmd::PublishText("a,b".into()).published_text(), Some("a,b"));
        let batch = Cmd::batch(vec![
            Cmd::PublishText("old".into()),
            Cmd::RenderGrid,
            Cmd::PublishText("new".into()),
        ]);
        assert_eq!(batch.published_text(), Some("new"));
        assert_eq!(Cmd::RenderGrid.published_text(), None);
    }
}
