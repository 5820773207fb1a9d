use serde::Deserialize;
use uuid::Uuid;

/// The only analytics event this service records.
pub const CONTENT_GENERATED_EVENT: &str = "content_generated";

/// Parameter key carrying the generated content type.
pub const CONTENT_TYPE_PARAM: &str = "content_type";

/// An analytics log event as forwarded by the event exporter.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub user_id: Option<String>,
    #[serde(default)]
    pub event_params: Vec<EventParam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventParam {
    pub key: String,
    #[serde(default)]
    pub value: ParamValue,
}

/// Typed parameter value; at most one field is set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamValue {
    pub string_value: Option<String>,
    pub int_value: Option<i64>,
    pub double_value: Option<f64>,
}

impl ParamValue {
    pub fn as_text(&self) -> Option<String> {
        self.string_value
            .clone()
            .or_else(|| self.int_value.map(|v| v.to_string()))
            .or_else(|| self.double_value.map(|v| v.to_string()))
    }
}

impl AnalyticsEvent {
    /// Text value of the parameter named `key`, if present.
    pub fn param(&self, key: &str) -> Option<String> {
        self.event_params
            .iter()
            .find(|p| p.key == key)
            .and_then(|p| p.value.as_text())
    }
}

/// A usage record to append. `created_at` is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsageRecord {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub content_type: Option<String>,
    pub event: String,
}
