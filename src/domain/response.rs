use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object returned by the gateway, kept verbatim.
///
/// The typed accessors cover the fields Jusibe documents; anything else is
/// reachable through [`GatewayResponse::get`] or [`GatewayResponse::as_object`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayResponse(Map<String, Value>);

impl GatewayResponse {
    pub fn new(object: Map<String, Value>) -> Self {
        Self(object)
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Scalar field rendered as text: strings as-is, numbers and booleans via their JSON form.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn sms_credits(&self) -> Option<String> {
        self.text("sms_credits")
    }

    pub fn sms_credits_used(&self) -> Option<String> {
        self.text("sms_credits_used")
    }

    pub fn status(&self) -> Option<String> {
        self.text("status")
    }

    pub fn message_id(&self) -> Option<String> {
        self.text("message_id")
    }

    pub fn date_sent(&self) -> Option<String> {
        self.text("date_sent")
    }

    pub fn date_delivered(&self) -> Option<String> {
        self.text("date_delivered")
    }

    /// Failure message, e.g. `Invalid API Key!`.
    pub fn error(&self) -> Option<String> {
        self.text("error")
    }

    /// Set by `delivery_status` for unknown ids, e.g. `Invalid message ID`.
    pub fn invalid_message_id(&self) -> Option<String> {
        self.text("invalid_message_id")
    }

    /// `true` when the gateway answered with one of its failure fields.
    pub fn is_error(&self) -> bool {
        self.contains("error") || self.contains("invalid_message_id")
    }
}

impl From<Map<String, Value>> for GatewayResponse {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
