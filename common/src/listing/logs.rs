use super::{ActionContext, ListRecord, unsupported};
use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::entity::EntityKind;
use crate::model::log_entry::{LogEntry, RunStatus};
use crate::service::Fields;
use crate::view::format::{format_datetime, format_seconds, or_dash};
use crate::view::preview::truncate_preview;
use crate::view::{ActionKind, Badge, Card, Note, NoteStyle, Tone};

impl ListRecord for LogEntry {
    const KIND: EntityKind = EntityKind::Log;
    const EMPTY_MESSAGE: &'static str = "로그가 없습니다.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn card(&self) -> Card {
        let badge = match self.status {
            RunStatus::Success => Badge { label: "성공", tone: Tone::Reviewed },
            RunStatus::Error => Badge { label: "오류", tone: Tone::New },
        };
        let title = if self.is_aggregate() {
            "전체 모니터링".to_string()
        } else {
            or_dash(self.law_code.as_deref())
        };

        let mut info = vec![
            format!("🕐 {}", format_datetime(self.check_date.as_deref())),
            if self.changes_detected {
                "✅ 변경사항 발견".to_string()
            } else {
                "⏺️ 변경사항 없음".to_string()
            },
        ];
        if let Some(seconds) = self.execution_time {
            info.push(format!("⏱️ {}", format_seconds(seconds)));
        }

        Card {
            record_id: self.id,
            title,
            badge,
            info,
            note: self.error_message().map(|message| Note {
                style: NoteStyle::Warning,
                label: Some("오류:"),
                text: truncate_preview(message),
            }),
            actions: Vec::new(),
        }
    }

    fn update_fields(&self, action: ActionKind, _ctx: &ActionContext) -> Result<Fields, DashboardError> {
        Err(unsupported(Self::KIND, action))
    }
}
