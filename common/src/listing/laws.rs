use super::{ActionContext, ListRecord, unsupported};
use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::entity::EntityKind;
use crate::model::law::LawEntry;
use crate::service::Fields;
use crate::view::format::{format_datetime, or_dash};
use crate::view::{ActionButton, ActionKind, Badge, ButtonStyle, Card, Note, NoteStyle, Tone};
use serde_json::Value;

impl ListRecord for LawEntry {
    const KIND: EntityKind = EntityKind::Law;
    const EMPTY_MESSAGE: &'static str = "등록된 법령이 없습니다.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn card(&self) -> Card {
        let (badge, toggle_label) = if self.is_active {
            (Badge { label: "모니터링중", tone: Tone::Active }, "비활성화")
        } else {
            (Badge { label: "비활성", tone: Tone::Inactive }, "활성화")
        };

        Card {
            record_id: self.id,
            title: self.law_name.clone(),
            badge,
            info: vec![
                format!("📋 {}", or_dash(self.law_type.as_deref())),
                format!("👤 담당: {}", or_dash(self.manager.as_deref())),
                format!("🏢 {}", or_dash(self.department.as_deref())),
            ],
            note: self.last_check_date.as_deref().map(|checked| Note {
                style: NoteStyle::Muted,
                label: None,
                text: format!("마지막 확인: {}", format_datetime(Some(checked))),
            }),
            actions: vec![ActionButton {
                label: toggle_label,
                action: ActionKind::SetActive(!self.is_active),
                record_id: self.id,
                style: ButtonStyle::Toggle,
            }],
        }
    }

    fn update_fields(&self, action: ActionKind, _ctx: &ActionContext) -> Result<Fields, DashboardError> {
        match action {
            ActionKind::SetActive(active) => {
                let mut fields = Fields::new();
                fields.insert("is_active".into(), Value::Bool(active));
                Ok(fields)
            }
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}
