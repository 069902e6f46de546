//! Command-line argument parsing
//!
//! Supports:
//! - Opening a CSV file
//! - Starting empty instead of with the sample table
//! - Reading preferences from an alternate config file

use clap::Parser;
use std::path::PathBuf;

/// Edit CSV as text and as a table, kept in sync
#[derive(Parser, Debug)]
#[command(name = "gridsync", version, about = "Edit CSV as text and as a table")]
pub struct CliArgs {
    /// CSV file to open
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Start with an empty table instead of the sample data
    #[arg(long)]
    pub no_sample: bool,

    /// Read preferences from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// The startup mode determines the initial text
#[derive(Debug, Clone, PartialEq)]
pub enum StartupMode {
    /// Start with no text
    Empty,
    /// Start with the built-in sample table
    Sample,
    /// Load a file
    File(PathBuf),
}

impl CliArgs {
    /// Decide what to show first. `load_sample` comes from the config.
    pub fn startup_mode(&self, load_sample: bool) -> Result<StartupMode, String> {
        match &self.file {
            Some(path) if path.is_dir() => {
                Err(format!("{} is a directory, expected a CSV file", path.display()))
            }
            Some(path) => Ok(StartupMode::File(path.clone())),
            None if self.no_sample || !load_sample => Ok(StartupMode::Empty),
            None => Ok(StartupMode::Sample),
        }
    }
}
