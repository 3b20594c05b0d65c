//! Query descriptions sent to the remote data service.
//!
//! A `Query` is at most one equality filter, one ordering and an optional
//! limit. `Query::params` renders it as PostgREST query parameters
//! (`field=eq.value`, `order=field.desc`, `limit=n`); URL encoding is left to
//! the HTTP client.
//!
//! Boolean columns may hold null, which the record models read as `false`.
//! PostgREST's `eq.false` skips those rows, so a `false` filter is sent as
//! `not.is.true` instead.

use crate::model::RecordId;
use crate::model::entity::EntityKind;

/// Right-hand side of an equality filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Text(String),
    Id(RecordId),
}

impl FilterValue {
    pub fn to_param(&self) -> String {
        match self {
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Text(s) => s.clone(),
            FilterValue::Id(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: &'static str,
    pub value: FilterValue,
}

impl Filter {
    pub fn eq(field: &'static str, value: FilterValue) -> Self {
        Self { field, value }
    }

    /// PostgREST operator and operand for this filter.
    pub fn condition(&self) -> String {
        match &self.value {
            FilterValue::Bool(false) => "not.is.true".to_string(),
            value => format!("eq.{}", value.to_param()),
        }
    }
}

/// What the filter control of a view currently selects.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Equals(FilterValue),
}

impl FilterSelection {
    /// Value for the `<select>` control (`all`, `true`, `pending`, ...).
    pub fn select_value(&self) -> String {
        match self {
            FilterSelection::All => "all".to_string(),
            FilterSelection::Equals(value) => value.to_param(),
        }
    }

    pub fn to_filter(&self, field: Option<&'static str>) -> Option<Filter> {
        match (self, field) {
            (FilterSelection::Equals(value), Some(field)) => Some(Filter::eq(field, value.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub field: &'static str,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
    pub order: Order,
    pub limit: Option<usize>,
}

impl Query {
    /// Unfiltered, newest first on the entity's natural date column.
    pub fn for_entity(kind: EntityKind) -> Self {
        Self {
            filter: None,
            order: Order {
                field: kind.order_field(),
                direction: Direction::Descending,
            },
            limit: kind.default_limit(),
        }
    }

    pub fn with_filter(mut self, filter: Option<Filter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        if let Some(filter) = &self.filter {
            params.push((filter.field.to_string(), filter.condition()));
        }
        let direction = match self.order.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        params.push(("order".to_string(), format!("{}.{}", self.order.field, direction)));
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}
