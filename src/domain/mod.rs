//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SmsPayload;
pub use response::GatewayResponse;
pub use validation::ValidationError;
pub use value::{
    AccessToken, MessageId, MessageText, PhoneNumber, PublicKey, RawPhoneNumber, SenderId,
};
