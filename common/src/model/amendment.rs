use super::{RecordId, null_as_false};
use serde::{Deserialize, Serialize};

/// A detected amendment of a monitored law (`law_amendments` row).
///
/// Rows are written by the monitoring run and only ever touched by the
/// dashboard to mark them reviewed. `reviewer` and `review_date` are expected
/// to stay unset while `is_reviewed` is `false`; the only mutation the
/// dashboard issues sets all three together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amendment {
    pub id: RecordId,
    pub law_code: Option<String>,
    /// Promulgation date (`YYYY-MM-DD`), the natural ordering field.
    pub amendment_date: Option<String>,
    pub enforcement_date: Option<String>,
    pub amendment_no: Option<String>,
    pub amendment_type: Option<String>,
    /// AI generated summary, shown as a truncated preview on the card.
    pub summary: Option<String>,
    /// AI generated impact analysis (markdown-ish text).
    pub impact_analysis: Option<String>,
    pub original_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_reviewed: bool,
    pub reviewer: Option<String>,
    pub review_date: Option<String>,
}

impl Amendment {
    /// Whether the review columns agree with the reviewed flag.
    pub fn review_fields_consistent(&self) -> bool {
        self.is_reviewed || (self.reviewer.is_none() && self.review_date.is_none())
    }
}
