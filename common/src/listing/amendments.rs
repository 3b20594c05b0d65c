use super::{ActionContext, ListRecord, unsupported};
use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::amendment::Amendment;
use crate::model::entity::EntityKind;
use crate::query::{FilterSelection, FilterValue};
use crate::service::Fields;
use crate::view::format::{format_date, format_datetime, or_dash};
use crate::view::preview::truncate_preview;
use crate::view::{
    ActionButton, ActionKind, Badge, ButtonStyle, Card, Detail, DetailSection, Note, NoteStyle, Tone,
};
use serde_json::Value;

impl ListRecord for Amendment {
    const KIND: EntityKind = EntityKind::Amendment;
    const EMPTY_MESSAGE: &'static str = "개정 이력이 없습니다.";
    const FILTER_FIELD: Option<&'static str> = Some("is_reviewed");
    const FILTER_OPTIONS: &'static [(&'static str, &'static str)] =
        &[("all", "전체"), ("false", "미검토"), ("true", "검토완료")];

    fn parse_filter(raw: &str) -> Result<FilterSelection, DashboardError> {
        match raw {
            "" | "all" => Ok(FilterSelection::All),
            "true" => Ok(FilterSelection::Equals(FilterValue::Bool(true))),
            "false" => Ok(FilterSelection::Equals(FilterValue::Bool(false))),
            other => Err(DashboardError::Validation(format!(
                "unknown review filter: {}",
                other
            ))),
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn card(&self) -> Card {
        let badge = if self.is_reviewed {
            Badge { label: "검토완료", tone: Tone::Reviewed }
        } else {
            Badge { label: "미검토", tone: Tone::New }
        };

        let mut actions = vec![ActionButton {
            label: "상세보기",
            action: ActionKind::ViewDetail,
            record_id: self.id,
            style: ButtonStyle::View,
        }];
        if !self.is_reviewed {
            actions.push(ActionButton {
                label: "검토완료",
                action: ActionKind::MarkReviewed,
                record_id: self.id,
                style: ButtonStyle::Complete,
            });
        }

        Card {
            record_id: self.id,
            title: self.law_code.clone().unwrap_or_default(),
            badge,
            info: vec![
                format!("📅 개정일: {}", format_date(self.amendment_date.as_deref())),
                format!("🚀 시행일: {}", format_date(self.enforcement_date.as_deref())),
                format!("📄 {}", or_dash(self.amendment_type.as_deref())),
            ],
            note: self
                .summary
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|summary| Note {
                    style: NoteStyle::Summary,
                    label: Some("요약:"),
                    text: truncate_preview(summary),
                }),
            actions,
        }
    }

    fn detail(&self) -> Option<Detail> {
        let mut facts = vec![
            ("개정일", format_date(self.amendment_date.as_deref())),
            ("시행일", format_date(self.enforcement_date.as_deref())),
            ("공포번호", or_dash(self.amendment_no.as_deref())),
            ("개정유형", or_dash(self.amendment_type.as_deref())),
        ];
        if self.is_reviewed {
            facts.push(("검토자", or_dash(self.reviewer.as_deref())));
            facts.push(("검토일", format_datetime(self.review_date.as_deref())));
        }

        let sections = [
            ("요약", &self.summary, false),
            ("영향 분석", &self.impact_analysis, true),
            ("개정 원문", &self.original_text, false),
        ]
        .into_iter()
        .filter_map(|(heading, body, markdown)| {
            body.as_deref()
                .filter(|b| !b.trim().is_empty())
                .map(|b| DetailSection {
                    heading,
                    body: b.to_string(),
                    markdown,
                })
        })
        .collect();

        Some(Detail {
            title: or_dash(self.law_code.as_deref()),
            facts,
            sections,
        })
    }

    fn update_fields(&self, action: ActionKind, ctx: &ActionContext) -> Result<Fields, DashboardError> {
        match action {
            ActionKind::MarkReviewed if self.is_reviewed => Err(DashboardError::Validation(
                "이미 검토 완료된 개정입니다.".to_string(),
            )),
            ActionKind::MarkReviewed => {
                let mut fields = Fields::new();
                fields.insert("is_reviewed".into(), Value::Bool(true));
                fields.insert("reviewer".into(), Value::String(ctx.reviewer.clone()));
                fields.insert("review_date".into(), Value::String(ctx.timestamp()));
                Ok(fields)
            }
            other => Err(unsupported(Self::KIND, other)),
        }
    }
}
