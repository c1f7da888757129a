//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{BulkSendRequest, DEFAULT_ENCODING, OtpCredentials, OutboundMessage};
pub use response::{BulkSendResponse, OtpSendResponse};
pub use validation::ValidationError;
pub use value::{
    AppKey, KnownOtpCode, KnownResultCode, MessageHeader, MessageText, OtpCode, Password,
    RawPhoneNumber, ResultCode, SecretToken, UserCode,
};
