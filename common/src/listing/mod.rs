//! The generic filtered-list view.
//!
//! Every tab of the dashboard follows the same loop: filter → fetch → render
//! cards → act → refetch. `ListViewController` implements that loop once;
//! `ListRecord` is the per-table configuration (table, filter column, badge
//! rule, card layout, action → update payload).
//!
//! - `controller`: the generic controller.
//! - `amendments`, `laws`, `tasks`, `logs`: the four `ListRecord` impls.

mod amendments;
pub mod controller;
mod laws;
mod logs;
mod tasks;

pub use controller::ListViewController;

use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::entity::EntityKind;
use crate::query::FilterSelection;
use crate::service::{Fields, RemoteDataService};
use crate::view::{ActionKind, Card, Detail};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;

/// Inputs of an update payload that do not come from the record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionContext {
    pub now: DateTime<Utc>,
    pub reviewer: String,
}

impl ActionContext {
    pub fn now(reviewer: impl Into<String>) -> Self {
        Self {
            now: Utc::now(),
            reviewer: reviewer.into(),
        }
    }

    /// `now` as the remote side stores timestamps (`2025-10-16T09:00:00.000Z`).
    pub fn timestamp(&self) -> String {
        self.now.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Per-table settings of a list view.
pub trait ListRecord: DeserializeOwned + Clone + 'static {
    const KIND: EntityKind;

    /// Placeholder shown when the query returns no rows.
    const EMPTY_MESSAGE: &'static str;

    /// Column the filter control constrains, if the view has one.
    const FILTER_FIELD: Option<&'static str> = None;

    /// `(value, label)` pairs of the filter control, `all` first.
    const FILTER_OPTIONS: &'static [(&'static str, &'static str)] = &[];

    /// Parse a filter control value.
    fn parse_filter(raw: &str) -> Result<FilterSelection, DashboardError> {
        match raw {
            "" | "all" => Ok(FilterSelection::All),
            other => Err(DashboardError::Validation(format!(
                "unknown filter value for {}: {}",
                Self::KIND.table(),
                other
            ))),
        }
    }

    fn id(&self) -> RecordId;

    fn card(&self) -> Card;

    fn detail(&self) -> Option<Detail> {
        None
    }

    /// Columns to write for `action`, or an error if the action does not
    /// apply to this record in its current state.
    fn update_fields(&self, action: ActionKind, ctx: &ActionContext) -> Result<Fields, DashboardError>;
}

/// A single-row update ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub entity: EntityKind,
    pub id: RecordId,
    pub fields: Fields,
}

impl UpdateRequest {
    pub async fn send(&self, service: &dyn RemoteDataService) -> Result<(), DashboardError> {
        log::debug!(
            "update {} id={} columns={:?}",
            self.entity.table(),
            self.id,
            self.fields.keys().collect::<Vec<_>>()
        );
        service.update(self.entity, self.id, &self.fields).await
    }
}

pub(crate) fn unsupported(kind: EntityKind, action: ActionKind) -> DashboardError {
    DashboardError::Validation(format!("{:?} is not available for {}", action, kind.table()))
}
