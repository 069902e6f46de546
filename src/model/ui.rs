//! UI state that is not part of the table or the layout

/// Status line and pending I/O flags
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status line message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}
