//! In-memory `RemoteDataService` for tests.
//!
//! Evaluates the same filter conditions that go over the wire, with
//! PostgREST's null handling (`eq.*` never matches null, `not.is.true` does),
//! orders and limits the way PostgREST does, and records every mutation so
//! tests can inspect the payloads.

use super::{Fields, RemoteDataService};
use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::entity::EntityKind;
use crate::query::{Direction, Filter, Query};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Default)]
pub(crate) struct MemoryService {
    tables: RefCell<HashMap<EntityKind, Vec<Value>>>,
    failure: RefCell<Option<DashboardError>>,
    pub(crate) queries: RefCell<Vec<Query>>,
    pub(crate) updates: RefCell<Vec<(EntityKind, RecordId, Fields)>>,
    pub(crate) inserts: RefCell<Vec<(EntityKind, Fields)>>,
}

impl MemoryService {
    pub(crate) fn with_rows(kind: EntityKind, rows: Vec<Value>) -> Self {
        let service = Self::default();
        service.tables.borrow_mut().insert(kind, rows);
        service
    }

    pub(crate) fn and_rows(self, kind: EntityKind, rows: Vec<Value>) -> Self {
        self.tables.borrow_mut().insert(kind, rows);
        self
    }

    /// Every following call fails with `err` until cleared with `None`.
    pub(crate) fn set_failure(&self, err: Option<DashboardError>) {
        *self.failure.borrow_mut() = err;
    }

    fn check_failure(&self) -> Result<(), DashboardError> {
        match self.failure.borrow().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn holds(filter: &Filter, row: &Value) -> bool {
    let value = row.get(filter.field);
    let condition = filter.condition();
    if condition == "not.is.true" {
        return value != Some(&Value::Bool(true));
    }
    let Some(expected) = condition.strip_prefix("eq.") else {
        return false;
    };
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        _ => false,
    }
}

fn matching_rows(rows: Option<&Vec<Value>>, filter: Option<&Filter>) -> Vec<Value> {
    rows.map(|rows| {
        rows.iter()
            .filter(|row| filter.map_or(true, |filter| holds(filter, row)))
            .cloned()
            .collect()
    })
    .unwrap_or_default()
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Null) | None, Some(Value::Null) | None) => Ordering::Equal,
        // PostgREST puts nulls first on desc and last on asc; treating null
        // as the greatest value gives exactly that.
        (Some(Value::Null) | None, _) => Ordering::Greater,
        (_, Some(Value::Null) | None) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait(?Send)]
impl RemoteDataService for MemoryService {
    async fn query(&self, entity: EntityKind, query: &Query) -> Result<Vec<Value>, DashboardError> {
        self.queries.borrow_mut().push(query.clone());
        self.check_failure()?;

        let tables = self.tables.borrow();
        let mut rows = matching_rows(tables.get(&entity), query.filter.as_ref());

        let field = query.order.field;
        rows.sort_by(|a, b| {
            let ordering = compare(a.get(field), b.get(field));
            match query.order.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn update(
        &self,
        entity: EntityKind,
        id: RecordId,
        fields: &Fields,
    ) -> Result<(), DashboardError> {
        self.check_failure()?;
        self.updates.borrow_mut().push((entity, id, fields.clone()));

        let mut tables = self.tables.borrow_mut();
        let rows = tables.entry(entity).or_default();
        for row in rows.iter_mut() {
            if row.get("id").and_then(Value::as_i64) == Some(id.0) {
                if let Value::Object(columns) = row {
                    for (key, value) in fields {
                        columns.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        Ok(())
    }

    async fn insert(&self, entity: EntityKind, fields: &Fields) -> Result<(), DashboardError> {
        self.check_failure()?;
        self.inserts.borrow_mut().push((entity, fields.clone()));

        let mut tables = self.tables.borrow_mut();
        let rows = tables.entry(entity).or_default();
        let next_id = rows
            .iter()
            .filter_map(|row| row.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0)
            + 1;
        let mut row = fields.clone();
        row.insert("id".to_string(), Value::from(next_id));
        rows.push(Value::Object(row));
        Ok(())
    }

    async fn count(&self, entity: EntityKind, filter: Option<&Filter>) -> Result<u64, DashboardError> {
        self.check_failure()?;
        let tables = self.tables.borrow();
        Ok(matching_rows(tables.get(&entity), filter).len() as u64)
    }
}
