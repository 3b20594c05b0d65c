//! Server settings read from the environment.
//!
//! | Variable             | Default        |
//! |----------------------|----------------|
//! | `SUPABASE_URL`       | unset          |
//! | `SUPABASE_KEY`       | unset          |
//! | `DASHBOARD_REVIEWER` | `담당자`        |
//! | `HOST`               | `127.0.0.1`    |
//! | `PORT`               | `8080`         |
//! | `OPEN_BROWSER`       | on (`0`/`false` turns it off) |
//!
//! Missing data service settings do not stop the server: `/health` reports
//! them and `/api/config` answers `503` until they are set.

use common::model::config::DashboardConfig;
use common::DashboardError;
use thiserror::Error;

const DEFAULT_REVIEWER: &str = "담당자";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub reviewer: String,
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self {
            supabase_url: get("SUPABASE_URL"),
            supabase_key: get("SUPABASE_KEY"),
            reviewer: get("DASHBOARD_REVIEWER").unwrap_or_else(|| DEFAULT_REVIEWER.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser: !matches!(get("OPEN_BROWSER").as_deref(), Some("0") | Some("false")),
        })
    }

    pub fn supabase_configured(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_key.is_some()
    }

    /// What the browser needs to reach the data service.
    pub fn dashboard_config(&self) -> Result<DashboardConfig, DashboardError> {
        let (Some(url), Some(key)) = (&self.supabase_url, &self.supabase_key) else {
            return Err(DashboardError::Config(
                "SUPABASE_URL and SUPABASE_KEY must be set".to_string(),
            ));
        };
        let config = DashboardConfig {
            supabase_url: url.clone(),
            supabase_key: key.clone(),
            reviewer: self.reviewer.clone(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
