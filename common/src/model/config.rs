use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

/// Connection settings handed from the backend to the browser.
///
/// Served by `GET /api/config`; the frontend builds its single remote data
/// service handle from it. The key is the public (anon) key of the hosted
/// project, so exposing it to the page is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Project endpoint, e.g. `https://xyz.supabase.co`.
    pub supabase_url: String,
    /// Access token sent as `apikey` and bearer token.
    pub supabase_key: String,
    /// Name recorded as reviewer when an amendment is marked reviewed.
    pub reviewer: String,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.supabase_url.trim().is_empty() {
            return Err(DashboardError::Config("endpoint URL is empty".into()));
        }
        if !self.supabase_url.starts_with("http://") && !self.supabase_url.starts_with("https://") {
            return Err(DashboardError::Config(format!(
                "endpoint URL must be http(s): {}",
                self.supabase_url
            )));
        }
        if self.supabase_key.trim().is_empty() {
            return Err(DashboardError::Config("access token is empty".into()));
        }
        Ok(())
    }
}
