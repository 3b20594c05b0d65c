use crate::model::RecordId;
use crate::model::task::TaskStatus;
use thiserror::Error;

/// Every failure the dashboard can surface.
///
/// The `Display` text is what ends up in the inline error placeholder or in
/// the blocking alert, so it carries the remote message verbatim when there
/// is one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("remote data service is not initialized")]
    NotInitialized,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("record {0} is not in the current list")]
    RecordNotFound(RecordId),

    #[error("task cannot move from {from} to {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },

    #[error("{0}")]
    Validation(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}
