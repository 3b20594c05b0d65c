//! Summary counts shown above the tabs.
//!
//! Three count requests, no rows transferred. The unreviewed count uses the
//! same filter as the amendments tab, so null review flags are included.

use crate::error::DashboardError;
use crate::model::entity::EntityKind;
use crate::query::{Filter, FilterValue};
use crate::service::RemoteDataService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Registry rows with `is_active = true`.
    pub active_laws: u64,
    pub unreviewed_amendments: u64,
    pub total_amendments: u64,
}

impl DashboardStats {
    /// Label/value pairs in display order.
    pub fn tiles(&self) -> [(&'static str, u64); 3] {
        [
            ("모니터링 법령", self.active_laws),
            ("미검토 개정", self.unreviewed_amendments),
            ("전체 개정 이력", self.total_amendments),
        ]
    }
}

pub async fn fetch_stats(service: &dyn RemoteDataService) -> Result<DashboardStats, DashboardError> {
    let active = Filter::eq("is_active", FilterValue::Bool(true));
    let unreviewed = Filter::eq("is_reviewed", FilterValue::Bool(false));

    let stats = DashboardStats {
        active_laws: service.count(EntityKind::Law, Some(&active)).await?,
        unreviewed_amendments: service.count(EntityKind::Amendment, Some(&unreviewed)).await?,
        total_amendments: service.count(EntityKind::Amendment, None).await?,
    };
    log::debug!("stats {:?}", stats);
    Ok(stats)
}
