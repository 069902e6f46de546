//! Session configuration persistence
//!
//! Stores user preferences in `~/.config/gridsync/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Layout and rendering preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Smallest width the text (left) panel can be dragged to, in pixels
    pub min_panel_width: f32,
    /// Smallest width left for the grid (right) panel, in pixels
    pub min_right_panel_width: f32,
    /// Smallest width a grid column can be dragged to, in pixels
    pub min_column_width: f32,
    /// Total width shared by both panels and the separator
    pub container_width: f32,
    /// Width of the draggable separator between the panels
    pub separator_width: f32,
    /// Width of one character cell, used to size columns from content
    pub char_width: f32,
    /// Horizontal padding added to every column
    pub cell_padding: f32,
    /// Content longer than this does not widen a column further
    pub max_column_chars: usize,
    /// Start with the sample table when no file is given
    pub load_sample: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_panel_width: 100.0,
            min_right_panel_width: 100.0,
            min_column_width: 50.0,
            container_width: 1200.0,
            separator_width: 8.0,
            char_width: 8.0,
            cell_padding: 12.0,
            max_column_chars: 40,
            load_sample: true,
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
