//! gridsync - CSV text and table editing, kept in sync
//!
//! This crate provides the core types and logic for a two-surface CSV
//! editor implementing the Elm Architecture pattern: a text surface holding
//! raw CSV and a grid surface holding the decoded table.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::{Session, Surface};
