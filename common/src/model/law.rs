use super::{RecordId, null_as_false};
use serde::{Deserialize, Serialize};

/// A law in the monitoring registry (`law_master` row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawEntry {
    pub id: RecordId,
    pub law_code: Option<String>,
    #[serde(default)]
    pub law_name: String,
    pub law_type: Option<String>,
    pub department: Option<String>,
    pub manager: Option<String>,
    /// Inactive laws are skipped by the monitoring run.
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_active: bool,
    pub last_check_date: Option<String>,
    pub last_amendment_date: Option<String>,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_registry_row() {
        let row = serde_json::json!({
            "id": 7,
            "law_code": "산업안전보건법",
            "law_name": "산업안전보건법",
            "law_type": "법률",
            "department": "안전감사팀",
            "manager": "김담당",
            "is_active": true,
            "last_check_date": "2025-10-02T09:00:03.512+00:00",
            "created_at": "2025-10-01T12:00:00+00:00"
        });
        let law: LawEntry = serde_json::from_value(row).unwrap();
        assert!(law.is_active);
        assert_eq!(law.manager.as_deref(), Some("김담당"));
        assert!(law.last_amendment_date.is_none());
    }
}
