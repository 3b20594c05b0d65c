use crate::error::DashboardError;
use crate::model::entity::EntityKind;
use crate::service::{Fields, RemoteDataService};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of the "add law" form.
/// The name doubles as the law code until the monitoring run resolves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLaw {
    pub law_name: String,
    pub law_type: String,
    pub department: String,
    pub manager: String,
}

impl NewLaw {
    pub fn into_fields(self) -> Result<Fields, DashboardError> {
        let name = self.law_name.trim().to_string();
        if name.is_empty() {
            return Err(DashboardError::Validation("법령명을 입력해주세요.".to_string()));
        }

        let mut fields = Fields::new();
        fields.insert("law_code".into(), Value::String(name.clone()));
        fields.insert("law_name".into(), Value::String(name));
        fields.insert("law_type".into(), optional(self.law_type));
        fields.insert("department".into(), optional(self.department));
        fields.insert("manager".into(), optional(self.manager));
        fields.insert("is_active".into(), Value::Bool(true));
        Ok(fields)
    }
}

fn optional(text: String) -> Value {
    let text = text.trim();
    if text.is_empty() {
        Value::Null
    } else {
        Value::String(text.to_string())
    }
}

/// Register a law for monitoring. Nothing is sent if the form is invalid.
pub async fn insert_law(service: &dyn RemoteDataService, law: NewLaw) -> Result<(), DashboardError> {
    let fields = law.into_fields()?;
    log::debug!("insert {} {:?}", EntityKind::Law.table(), fields.get("law_name"));
    service.insert(EntityKind::Law, &fields).await.map_err(|err| {
        log::warn!("adding law failed: {}", err);
        err
    })
}
