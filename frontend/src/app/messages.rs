use common::model::config::DashboardConfig;
use common::router::Tab;
use common::stats::DashboardStats;
use common::DashboardError;

pub enum Msg {
    ConfigLoaded(Result<DashboardConfig, DashboardError>),
    Activate(Tab),
    OpenLawForm,
    LawAdded,
    StatsLoaded(Result<DashboardStats, DashboardError>),
}
