//! Structured card descriptions.
//!
//! A `Card` carries only text and button descriptors. Buttons name an
//! `ActionKind` and the record they act on; the presentation layer turns
//! them into real callbacks.

use crate::model::RecordId;
use crate::model::task::TaskStatus;

/// Colour family of a badge; maps onto a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Reviewed,
    New,
    Active,
    Inactive,
    Status(TaskStatus),
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Reviewed => "badge-reviewed",
            Tone::New => "badge-new",
            Tone::Active => "badge-active",
            Tone::Inactive => "badge-inactive",
            Tone::Status(TaskStatus::Pending) => "badge-pending",
            Tone::Status(TaskStatus::InProgress) => "badge-in_progress",
            Tone::Status(TaskStatus::Completed) => "badge-completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

/// What a button asks for. Everything except `ViewDetail` becomes a single
/// update call on the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    ViewDetail,
    MarkReviewed,
    SetActive(bool),
    SetStatus(TaskStatus),
}

impl ActionKind {
    pub fn is_mutation(self) -> bool {
        !matches!(self, ActionKind::ViewDetail)
    }

    /// Question to confirm before sending, if the action needs one.
    pub fn confirmation(self) -> Option<&'static str> {
        match self {
            ActionKind::MarkReviewed => Some("검토 완료로 표시하시겠습니까?"),
            _ => None,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            ActionKind::ViewDetail => "",
            ActionKind::MarkReviewed => "검토 완료로 표시되었습니다.",
            ActionKind::SetActive(true) => "모니터링이 활성화되었습니다.",
            ActionKind::SetActive(false) => "모니터링이 비활성화되었습니다.",
            ActionKind::SetStatus(_) => "업무 상태가 변경되었습니다.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    View,
    Complete,
    Edit,
    Toggle,
}

impl ButtonStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            ButtonStyle::View => "btn-view",
            ButtonStyle::Complete => "btn-complete",
            ButtonStyle::Edit => "btn-edit",
            ButtonStyle::Toggle => "btn-toggle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub action: ActionKind,
    pub record_id: RecordId,
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStyle {
    /// Boxed preview of a long text.
    Summary,
    Plain,
    Muted,
    Warning,
}

/// A free-text block under the info line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub style: NoteStyle,
    pub label: Option<&'static str>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub record_id: RecordId,
    pub title: String,
    pub badge: Badge,
    /// Short facts rendered side by side (dates, owner, type...).
    pub info: Vec<String>,
    pub note: Option<Note>,
    pub actions: Vec<ActionButton>,
}

impl Card {
    pub fn has_action(&self, action: ActionKind) -> bool {
        self.actions.iter().any(|button| button.action == action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub body: String,
    /// Render `body` as markdown instead of preformatted text.
    pub markdown: bool,
}

/// Full view of one record, opened by `ActionKind::ViewDetail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub title: String,
    pub facts: Vec<(&'static str, String)>,
    pub sections: Vec<DetailSection>,
}
