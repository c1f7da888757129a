//! Typed client for the NetGSM HTTP APIs, plus the axum routers that expose
//! them as a small relay service.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks, a client layer orchestrating requests, and a relay
//! layer with the HTTP surface the binaries serve.
//!
//! ```rust,no_run
//! use netgsm_relay::{
//!     BulkSendRequest, MessageHeader, MessageText, NetgsmClient, OutboundMessage, Password,
//!     RawPhoneNumber, UserCode,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), netgsm_relay::NetgsmError> {
//!     let client = NetgsmClient::new(UserCode::new("8503020000")?, Password::new("...")?);
//!     let message = OutboundMessage::new(
//!         MessageText::new("hello")?,
//!         RawPhoneNumber::new("905551234567")?,
//!     );
//!     let request = BulkSendRequest::new(MessageHeader::new("Baslik")?, vec![message]);
//!     let response = client.send(&request).await?;
//!     println!("{}: {}", response.code.as_str(), response.job_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod relay;
mod transport;

pub use client::{
    NetgsmClient, NetgsmClientBuilder, NetgsmError, NetgsmOtpClient, NetgsmOtpClientBuilder,
};
pub use domain::{
    AppKey, BulkSendRequest, BulkSendResponse, DEFAULT_ENCODING, KnownOtpCode, KnownResultCode,
    MessageHeader, MessageText, OtpCode, OtpCredentials, OtpSendResponse, OutboundMessage,
    Password, RawPhoneNumber, ResultCode, SecretToken, UserCode, ValidationError,
};
pub use relay::{ApiError, ConfigError, RelayConfig, RelayState, WebhookConfig, WebhookState};
