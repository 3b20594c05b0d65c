pub mod amendment;
pub mod config;
pub mod entity;
pub mod law;
pub mod log_entry;
pub mod task;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Primary key of a row in any of the remote tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boolean columns are nullable on the remote side; a missing or `null`
/// value reads as `false`.
pub(crate) fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
