//! The remote data service port.
//!
//! The dashboard never owns data; every list is fetched through this trait
//! and every mutation is a single `update`/`insert` round trip. The trait is
//! `?Send` because the browser implementation awaits `!Send` JS futures.

pub mod postgrest;

#[cfg(test)]
pub(crate) mod memory;

use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::entity::EntityKind;
use crate::query::{Filter, Query};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::rc::Rc;

/// Column/value pairs of a partial update or an insert.
pub type Fields = Map<String, Value>;

#[async_trait(?Send)]
pub trait RemoteDataService {
    /// Rows of `entity` matching `query`, in the requested order.
    async fn query(&self, entity: EntityKind, query: &Query) -> Result<Vec<Value>, DashboardError>;

    async fn update(
        &self,
        entity: EntityKind,
        id: RecordId,
        fields: &Fields,
    ) -> Result<(), DashboardError>;

    async fn insert(&self, entity: EntityKind, fields: &Fields) -> Result<(), DashboardError>;

    /// Number of rows of `entity` matching `filter`, without fetching them.
    async fn count(&self, entity: EntityKind, filter: Option<&Filter>) -> Result<u64, DashboardError>;
}

/// The one service handle, shared by every controller.
pub type SharedService = Rc<dyn RemoteDataService>;
