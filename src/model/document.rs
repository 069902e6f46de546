//! Document model - the canonical CSV text and its file state

use ropey::Rope;
use std::path::{Path, PathBuf};

/// The text side of the sync: what the text surface shows
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for sample or typed-in data)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Document revision counter (incremented on each change)
    pub revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            is_modified: false,
            revision: 0,
        }
    }

    /// Replace the whole content, marking the document modified
    pub fn replace_text(&mut self, text: &str) {
        if self.buffer == text {
            return;
        }
        self.buffer = Rope::from(text);
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Replace the content with freshly loaded file content
    pub fn load(&mut self, text: &str, path: PathBuf) {
        self.buffer = Rope::from(text);
        self.file_path = Some(path);
        self.is_modified = false;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
        self.is_modified = false;
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get display name for the document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("untitled.csv")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_text_bumps_revision() {
        let mut doc = Document::with_text("a,b");
        doc.replace_text("a,c");

        assert_eq!(doc.text(), "a,c");
        assert_eq!(doc.revision, 1);
        assert!(doc.is_modified);
    }

    #[test]
    fn test_replace_with_same_text_is_noop() {
        let mut doc = Document::with_text("a,b");
        doc.replace_text("a,b");

        assert_eq!(doc.revision, 0);
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_load_and_save_state() {
        let mut doc = Document::new();
        doc.load("x,y", PathBuf::from("/tmp/data.csv"));

        assert!(!doc.is_modified);
        assert_eq!(doc.display_name(), "data.csv");

        doc.replace_text("x,z");
        assert!(doc.is_modified);

        doc.mark_saved(Path::new("/tmp/other.csv"));
        assert!(!doc.is_modified);
        assert_eq!(doc.display_name(), "other.csv");
    }

    #[test]
    fn test_display_name_untitled() {
        assert_eq!(Document::new().display_name(), "untitled.csv");
    }
}
