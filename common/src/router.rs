use crate::model::entity::EntityKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Amendments,
    Laws,
    Tasks,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Amendments, Tab::Laws, Tab::Tasks, Tab::Logs];

    /// DOM id suffix and the value carried by the tab buttons.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Amendments => "amendments",
            Tab::Laws => "laws",
            Tab::Tasks => "tasks",
            Tab::Logs => "logs",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Amendments => "📋 개정 이력",
            Tab::Laws => "📚 법령 관리",
            Tab::Tasks => "✅ 후속 업무",
            Tab::Logs => "📊 모니터링 로그",
        }
    }

    pub fn kind(self) -> EntityKind {
        match self {
            Tab::Amendments => EntityKind::Amendment,
            Tab::Laws => EntityKind::Law,
            Tab::Tasks => EntityKind::Task,
            Tab::Logs => EntityKind::Log,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which tab is visible.
///
/// `generation` grows on every activation, including re-activating the tab
/// that is already shown. Views compare it with the last value they loaded
/// for and refresh when it changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabRouter {
    active: Tab,
    generation: u64,
}

impl TabRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, tab: Tab) {
        log::debug!("activate tab {} (was {})", tab, self.active);
        self.active = tab;
        self.generation += 1;
    }

    /// Activate by DOM id. Unknown ids leave the router untouched.
    pub fn activate_id(&mut self, raw: &str) -> Option<Tab> {
        let tab = Tab::parse(raw)?;
        self.activate(tab);
        Some(tab)
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-panel record of the router generation it last refreshed for.
///
/// A panel refreshes when it is visible and the generation moved since its
/// last refresh; every other props change is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshGate {
    loaded: Option<u64>,
}

impl RefreshGate {
    /// Whether a refresh is due, claiming `generation` if so.
    pub fn claim(&mut self, active: bool, generation: u64) -> bool {
        if !active || self.loaded == Some(generation) {
            return false;
        }
        self.loaded = Some(generation);
        true
    }
}
