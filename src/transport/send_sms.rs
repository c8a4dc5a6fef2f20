use serde_json::{Map, Value};

use crate::domain::{MessageText, RawPhoneNumber, SenderId, SmsPayload};

pub fn encode_send_sms_body(payload: &SmsPayload) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(
        RawPhoneNumber::FIELD.to_owned(),
        Value::String(payload.recipient().raw().to_owned()),
    );
    body.insert(
        SenderId::FIELD.to_owned(),
        Value::String(payload.sender().as_str().to_owned()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(payload.message().as_str().to_owned()),
    );
    body
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_send_sms_body_fields() {
        let payload = SmsPayload::new(
            RawPhoneNumber::new("08031234567").unwrap(),
            SenderId::new("Jusibe").unwrap(),
            MessageText::new("Hello from Jusibe").unwrap(),
        );

        assert_eq!(
            Value::Object(encode_send_sms_body(&payload)),
            json!({
                "to": "08031234567",
                "from": "Jusibe",
                "message": "Hello from Jusibe"
            })
        );
    }

    #[test]
    fn encode_keeps_message_whitespace() {
        let payload = SmsPayload::from_parts("+2348031234567", "Shop", "  padded  ").unwrap();
        let body = encode_send_sms_body(&payload);
        assert_eq!(body.get("message"), Some(&json!("  padded  ")));
    }
}
