use common::model::config::DashboardConfig;
use common::service::postgrest::http_error;
use common::DashboardError;
use gloo_net::http::Request;

use super::transport;

const CONFIG_URL: &str = "/api/config";

/// Ask the backend how to reach the data service. Any failure here is fatal
/// for the page.
pub async fn fetch_config() -> Result<DashboardConfig, DashboardError> {
    let response = Request::get(CONFIG_URL).send().await.map_err(transport)?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(http_error(response.status(), &body));
    }

    let config: DashboardConfig = response
        .json()
        .await
        .map_err(|err| DashboardError::Decode(err.to_string()))?;
    config.validate()?;
    Ok(config)
}
