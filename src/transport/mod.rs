//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod delivery_status;
mod response;
mod send_sms;

pub use delivery_status::encode_delivery_status_query;
pub use response::decode_json_response;
pub use send_sms::encode_send_sms_body;
