use serde_json::Value;

use crate::domain::GatewayResponse;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// Decode a gateway body into its verbatim JSON object.
pub fn decode_json_response(json: &str) -> Result<GatewayResponse, TransportError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(object) => Ok(GatewayResponse::new(object)),
        other => Err(TransportError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
