use super::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a follow-up task.
///
/// Variants are declared in lifecycle order so `Ord` doubles as the
/// "only forward" rule: a task may move to any later state, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created by the monitoring run, nobody has picked it up yet.
    Pending,
    /// Someone is working on it.
    InProgress,
    /// Done. Terminal; `completed_date` is set.
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire value, also used as the filter control value.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "대기중",
            TaskStatus::InProgress => "진행중",
            TaskStatus::Completed => "완료",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == TaskStatus::Completed
    }

    pub fn can_advance_to(self, next: TaskStatus) -> bool {
        next > self
    }

    /// States reachable in one click from this one.
    pub fn next_steps(self) -> &'static [TaskStatus] {
        match self {
            TaskStatus::Pending => &[TaskStatus::InProgress, TaskStatus::Completed],
            TaskStatus::InProgress => &[TaskStatus::Completed],
            TaskStatus::Completed => &[],
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "낮음",
            Priority::Medium => "보통",
            Priority::High => "높음",
        }
    }
}

/// A follow-up task derived from an amendment (`follow_up_tasks` row).
///
/// `completed_date` is set exactly when `status` is `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub amendment_id: Option<RecordId>,
    pub task_title: Option<String>,
    pub task_description: Option<String>,
    pub task_type: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub status: TaskStatus,
    pub completed_date: Option<String>,
    pub created_at: Option<String>,
}
