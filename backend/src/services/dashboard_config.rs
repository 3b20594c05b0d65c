//! `GET /api/config`: connection settings for the browser.
//!
//! The page cannot do anything without them, so a missing or invalid setup
//! is reported as `503` with `{"error": ...}`; the frontend turns that into
//! its "connection failed" state.

use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Responder, Scope};
use log::warn;
use serde_json::json;

use crate::config::ServerConfig;

const API_PATH: &str = "/api/config";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

pub async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    match config.dashboard_config() {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(e) => {
            warn!("refusing /api/config: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({ "error": e.to_string() }))
        }
    }
}
