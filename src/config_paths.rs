//! Where gridsync keeps its files
//!
//! One directory holds everything:
//!
//! ```text
//! gridsync/
//!   config.yaml           column and panel limits, sample data toggle
//!   logs/gridsync.log.*   daily debug log written by the tracing file layer
//! ```
//!
//! The directory is `$XDG_CONFIG_HOME/gridsync` or `~/.config/gridsync`, and
//! `%APPDATA%\gridsync` on Windows. Nothing is created until a config save or
//! the logger needs it.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "gridsync";

/// Base name of the rotating log file
pub const LOG_FILE_NAME: &str = "gridsync.log";

/// The gridsync directory, or `None` when no home directory is known
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// The YAML file read by `AppConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Directory for the rotating debug log
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the log directory if needed
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No log directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
