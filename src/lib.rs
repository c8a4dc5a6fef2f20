//! Typed Rust client for the Jusibe SMS gateway HTTP API.
//!
//! The crate has three layers: a domain layer of validated types, a transport
//! layer for wire-format details, and a small client layer that signs each
//! request with basic auth and returns the gateway's JSON object verbatim.
//!
//! ```rust,no_run
//! use jusibe::{Credentials, JusibeClient, SmsPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jusibe::JusibeError> {
//!     let client = JusibeClient::new(Credentials::new("public-key", "access-token")?);
//!     let payload = SmsPayload::from_parts("08031234567", "Jusibe", "hello")?;
//!     let response = client.send_sms(&payload).await?;
//!     println!("message id: {:?}", response.message_id());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, JusibeClient, JusibeClientBuilder, JusibeError};
pub use domain::{
    AccessToken, GatewayResponse, MessageId, MessageText, PhoneNumber, PublicKey, RawPhoneNumber,
    SenderId, SmsPayload, ValidationError,
};
