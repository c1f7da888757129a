use crate::domain::value::{OtpCode, ResultCode};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed response from the NetGSM bulk send API.
///
/// A non-success [`ResultCode`] is still a response, not an error: NetGSM
/// answered, it just rejected the batch.
pub struct BulkSendResponse {
    pub code: ResultCode,
    pub job_id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed response from the NetGSM OTP send API.
///
/// `code` is [`OtpCode::UNKNOWN`] when the response XML carried no parseable
/// `<code>` element.
pub struct OtpSendResponse {
    pub code: OtpCode,
    pub job_id: Option<String>,
    pub error: Option<String>,
}
