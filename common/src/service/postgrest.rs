//! Request pieces for a PostgREST endpoint (the hosted Supabase REST API).
//!
//! The HTTP transport lives in the frontend; these helpers keep the URL,
//! header and error-body conventions testable outside the browser.

use crate::error::DashboardError;
use crate::model::RecordId;
use crate::query::Filter;
use serde::Deserialize;

/// `Prefer` header value for mutations whose response body we ignore.
pub const PREFER_MINIMAL: &str = "return=minimal";

/// `Prefer` header value asking for the total in `Content-Range`.
pub const PREFER_COUNT_EXACT: &str = "count=exact";

/// `{base}/rest/v1/{table}`, tolerating a trailing slash on `base`.
pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// Query parameter selecting one row by primary key.
pub fn id_filter(id: RecordId) -> (String, String) {
    ("id".to_string(), format!("eq.{}", id))
}

/// Parameters of a count request: a single id column and one row, since
/// only the `Content-Range` total is read.
pub fn count_params(filter: Option<&Filter>) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "id".to_string())];
    if let Some(filter) = filter {
        params.push((filter.field.to_string(), filter.condition()));
    }
    params.push(("limit".to_string(), "1".to_string()));
    params
}

/// Total row count from a `Content-Range` header (`0-0/42`, `*/0`).
pub fn parse_content_range(header: &str) -> Result<u64, DashboardError> {
    header
        .rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse().ok())
        .ok_or_else(|| DashboardError::Decode(format!("unusable Content-Range: {:?}", header)))
}

/// Headers authenticating a request with the project's access token.
pub fn auth_headers(token: &str) -> [(&'static str, String); 2] {
    [
        ("apikey", token.to_string()),
        ("Authorization", format!("Bearer {}", token)),
    ]
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Turn a non-2xx response into an error carrying the server's message.
pub fn http_error(status: u16, body: &str) -> DashboardError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response".to_string()
            } else {
                trimmed.to_string()
            }
        });
    DashboardError::Http { status, message }
}
