use super::{RecordId, null_as_false};
use serde::{Deserialize, Serialize};

/// `law_code` of a log row that summarises a whole monitoring run.
pub const AGGREGATE_LAW_CODE: &str = "ALL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Error,
}

/// One monitoring run result (`monitoring_logs` row). Never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: RecordId,
    pub law_code: Option<String>,
    pub check_date: Option<String>,
    pub status: RunStatus,
    #[serde(default, deserialize_with = "null_as_false")]
    pub changes_detected: bool,
    /// Seconds.
    pub execution_time: Option<f64>,
    pub error_message: Option<String>,
}

impl LogEntry {
    pub fn is_aggregate(&self) -> bool {
        self.law_code.as_deref() == Some(AGGREGATE_LAW_CODE)
    }

    /// The error message, only for failed runs.
    pub fn error_message(&self) -> Option<&str> {
        match self.status {
            RunStatus::Error => self.error_message.as_deref().filter(|m| !m.is_empty()),
            RunStatus::Success => None,
        }
    }
}
