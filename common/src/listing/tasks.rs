use super::{ActionContext, ListRecord, unsupported};
use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::entity::EntityKind;
use crate::model::task::{Task, TaskStatus};
use crate::query::{FilterSelection, FilterValue};
use crate::service::Fields;
use crate::view::format::{format_date, or_dash};
use crate::view::preview::truncate_preview;
use crate::view::{ActionButton, ActionKind, Badge, ButtonStyle, Card, Note, NoteStyle, Tone};
use serde_json::Value;

impl ListRecord for Task {
    const KIND: EntityKind = EntityKind::Task;
    const EMPTY_MESSAGE: &'static str = "후속 업무가 없습니다.";
    const FILTER_FIELD: Option<&'static str> = Some("status");
    const FILTER_OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("all", "전체"),
        ("pending", "대기중"),
        ("in_progress", "진행중"),
        ("completed", "완료"),
    ];

    fn parse_filter(raw: &str) -> Result<FilterSelection, DashboardError> {
        match raw {
            "" | "all" => Ok(FilterSelection::All),
            other => TaskStatus::parse(other)
                .map(|status| FilterSelection::Equals(FilterValue::Text(status.as_str().to_string())))
                .ok_or_else(|| DashboardError::Validation(format!("unknown task status: {}", other))),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn card(&self) -> Card {
        let actions = self
            .status
            .next_steps()
            .iter()
            .map(|next| {
                let (label, style) = match next {
                    TaskStatus::Completed => ("완료", ButtonStyle::Complete),
                    _ => ("진행중으로", ButtonStyle::Edit),
                };
                ActionButton {
                    label,
                    action: ActionKind::SetStatus(*next),
                    record_id: self.id,
                    style,
                }
            })
            .collect();

        Card {
            record_id: self.id,
            title: self.task_title.clone().unwrap_or_default(),
            badge: Badge {
                label: self.status.label(),
                tone: Tone::Status(self.status),
            },
            info: vec![
                format!("📂 {}", or_dash(self.task_type.as_deref())),
                format!("👤 {}", or_dash(self.assignee.as_deref())),
                format!("📅 기한: {}", format_date(self.due_date.as_deref())),
                format!("⚡ {}", self.priority.map(|p| p.label()).unwrap_or("-")),
            ],
            note: self
                .task_description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(|description| Note {
                    style: NoteStyle::Plain,
                    label: None,
                    text: truncate_preview(description),
                }),
            actions,
        }
    }

    fn update_fields(&self, action: ActionKind, ctx: &ActionContext) -> Result<Fields, DashboardError> {
        let ActionKind::SetStatus(next) = action else {
            return Err(unsupported(Self::KIND, action));
        };
        if !self.status.can_advance_to(next) {
            return Err(DashboardError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        let mut fields = Fields::new();
        fields.insert("status".into(), Value::String(next.as_str().to_string()));
        if next.is_terminal() {
            fields.insert("completed_date".into(), Value::String(ctx.timestamp()));
        }
        Ok(fields)
    }
}
