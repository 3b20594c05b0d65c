use serde::{Deserialize, Serialize};

/// The four remote tables the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Amendment,
    Law,
    Task,
    Log,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Amendment,
        EntityKind::Law,
        EntityKind::Task,
        EntityKind::Log,
    ];

    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Amendment => "law_amendments",
            EntityKind::Law => "law_master",
            EntityKind::Task => "follow_up_tasks",
            EntityKind::Log => "monitoring_logs",
        }
    }

    /// Column the list is sorted on, newest first.
    pub fn order_field(self) -> &'static str {
        match self {
            EntityKind::Amendment => "amendment_date",
            EntityKind::Law | EntityKind::Task => "created_at",
            EntityKind::Log => "check_date",
        }
    }

    pub fn default_limit(self) -> Option<usize> {
        match self {
            EntityKind::Log => Some(50),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_distinct() {
        let tables: std::collections::HashSet<_> =
            EntityKind::ALL.iter().map(|k| k.table()).collect();
        assert_eq!(tables.len(), 4);
        assert_eq!(EntityKind::Log.default_limit(), Some(50));
        assert_eq!(EntityKind::Amendment.default_limit(), None);
    }
}
