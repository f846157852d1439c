use serde::{Deserialize, Serialize};

/// A row of the internal operation log (`log.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "Date")]
    pub date: String, // RFC 3339, local time
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Message")]
    pub message: String,
}
