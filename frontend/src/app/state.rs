use common::router::TabRouter;
use common::stats::DashboardStats;
use yew::prelude::*;

use crate::services::ServiceHandle;

/// Whether the page could reach its data service.
pub enum Connection {
    Pending,
    Ready {
        service: ServiceHandle,
        reviewer: AttrValue,
    },
    Failed(String),
}

pub struct App {
    pub connection: Connection,
    pub router: TabRouter,
    pub law_sheet_ref: NodeRef,
    /// Last successful summary counts; `None` until the first load.
    pub stats: Option<DashboardStats>,
    /// Guard to avoid fetching the config more than once.
    pub started: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            connection: Connection::Pending,
            router: TabRouter::new(),
            law_sheet_ref: NodeRef::default(),
            stats: None,
            started: false,
        }
    }
}
