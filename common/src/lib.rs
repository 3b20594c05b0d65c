//! Shared core of the law amendment monitoring dashboard.
//!
//! Everything here is platform neutral so the frontend (WASM) and the backend
//! (actix) agree on the same types:
//! - `model`: the four externally owned record kinds plus the dashboard config.
//! - `query`: filter/order/limit descriptions and their PostgREST encoding.
//! - `service`: the `RemoteDataService` port the controllers talk to.
//! - `listing`: the generic `ListViewController` and its per-record settings.
//! - `view`: card descriptions, previews and date formatting.
//! - `requests`: the add-law form payload.
//! - `router`: which of the four tabs is visible.
//! - `stats`: the summary counts above the tabs.

pub mod error;
pub mod listing;
pub mod model;
pub mod query;
pub mod requests;
pub mod router;
pub mod service;
pub mod stats;
pub mod view;

pub use error::DashboardError;
