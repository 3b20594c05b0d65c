//! `GET /health`: liveness plus whether the data service is configured.

use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Responder, Scope};
use chrono::Local;
use serde_json::json;

use crate::config::ServerConfig;

const API_PATH: &str = "/health";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

pub async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    let supabase = if config.supabase_configured() {
        "configured"
    } else {
        "not configured"
    };
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Local::now().to_rfc3339(),
        "supabase": supabase,
    }))
}
