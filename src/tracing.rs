//! Logging setup and debug diagnostics
//!
//! Configure console output via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gridsync::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridsync/logs/gridsync.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::csv::Table;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the table shape for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    pub row_count: usize,
    pub column_count: usize,
    pub text_len: usize,
}

impl TableSnapshot {
    pub fn capture(table: &Table, text_len: usize) -> Self {
        Self {
            row_count: table.row_count(),
            column_count: table.column_count(),
            text_len,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &TableSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.row_count != other.row_count {
            changes.push(format!("rows: {} → {}", self.row_count, other.row_count));
        }
        if self.column_count != other.column_count {
            changes.push(format!(
                "columns: {} → {}",
                self.column_count, other.column_count
            ));
        }
        if self.text_len != other.text_len {
            changes.push(format!("text: {}b → {}b", self.text_len, other.text_len));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::decode;

    #[test]
    fn test_snapshot_diff_reports_shape_changes() {
        let before = TableSnapshot::capture(&decode("a,b\n1,2"), 7);
        let after = TableSnapshot::capture(&decode("a,b,c"), 5);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("rows: 2 → 1"));
        assert!(diff.contains("columns: 2 → 3"));
        assert!(diff.contains("text: 7b → 5b"));
    }

    #[test]
    fn test_snapshot_diff_none_when_equal() {
        let snap = TableSnapshot::capture(&decode("a,b"), 3);
        assert_eq!(snap.diff(&snap.clone()), None);
    }
}
