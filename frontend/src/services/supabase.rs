//! `RemoteDataService` over the hosted PostgREST endpoint.

use async_trait::async_trait;
use common::model::config::DashboardConfig;
use common::model::entity::EntityKind;
use common::model::RecordId;
use common::query::{Filter, Query};
use common::service::postgrest::{
    auth_headers, count_params, http_error, id_filter, parse_content_range, table_url, PREFER_COUNT_EXACT,
    PREFER_MINIMAL,
};
use common::service::{Fields, RemoteDataService};
use common::DashboardError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use super::transport;

pub struct SupabaseService {
    base_url: String,
    token: String,
}

impl SupabaseService {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            base_url: config.supabase_url.clone(),
            token: config.supabase_key.clone(),
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        auth_headers(&self.token)
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }

    fn url(&self, entity: EntityKind) -> String {
        table_url(&self.base_url, entity.table())
    }
}

async fn ensure_ok(response: Response) -> Result<Response, DashboardError> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(http_error(response.status(), &body))
}

#[async_trait(?Send)]
impl RemoteDataService for SupabaseService {
    async fn query(&self, entity: EntityKind, query: &Query) -> Result<Vec<Value>, DashboardError> {
        let params = query.params();
        let response = self
            .authorize(Request::get(&self.url(entity)))
            .query(params.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .send()
            .await
            .map_err(transport)?;

        ensure_ok(response)
            .await?
            .json::<Vec<Value>>()
            .await
            .map_err(|err| DashboardError::Decode(err.to_string()))
    }

    async fn update(
        &self,
        entity: EntityKind,
        id: RecordId,
        fields: &Fields,
    ) -> Result<(), DashboardError> {
        let (key, value) = id_filter(id);
        let request = self
            .authorize(Request::patch(&self.url(entity)))
            .query([(key.as_str(), value.as_str())])
            .header("Prefer", PREFER_MINIMAL)
            .json(fields)
            .map_err(transport)?;

        ensure_ok(request.send().await.map_err(transport)?).await?;
        Ok(())
    }

    async fn insert(&self, entity: EntityKind, fields: &Fields) -> Result<(), DashboardError> {
        let request = self
            .authorize(Request::post(&self.url(entity)))
            .header("Prefer", PREFER_MINIMAL)
            .json(fields)
            .map_err(transport)?;

        ensure_ok(request.send().await.map_err(transport)?).await?;
        Ok(())
    }

    async fn count(&self, entity: EntityKind, filter: Option<&Filter>) -> Result<u64, DashboardError> {
        let params = count_params(filter);
        let response = self
            .authorize(Request::get(&self.url(entity)))
            .query(params.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .header("Prefer", PREFER_COUNT_EXACT)
            .send()
            .await
            .map_err(transport)?;

        let response = ensure_ok(response).await?;
        let range = response.headers().get("content-range").unwrap_or_default();
        parse_content_range(&range)
    }
}
