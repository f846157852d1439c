use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::store::table::Table;
use crate::ui::messages::warning;
use chrono::Local;
use std::path::PathBuf;

pub const LOG_HEADERS: &[&str] = &["Date", "Operation", "Target", "Message"];

/// Append-only log of the operations performed on the data files.
#[derive(Debug, Clone)]
pub struct AuditLog {
    table: Table,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: Table::new(path, LOG_HEADERS),
        }
    }

    pub(crate) fn table(&self) -> &Table {
        &self.table
    }

    /// Write an internal log line.
    pub fn append(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // Timestamp locale, ISO 8601
        let now = Local::now().to_rfc3339();
        self.table.append([now.as_str(), operation, target, message])
    }

    /// Same as `append`, but a failure only produces a warning: the
    /// operation being logged has already succeeded.
    pub fn record(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.append(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn entries(&self) -> AppResult<Vec<LogEntry>> {
        self.table.read_as()
    }
}
