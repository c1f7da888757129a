use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
/// Request body for the authenticated send routes.
///
/// Fields are optional so that presence validation stays in the handlers
/// instead of surfacing as a framework rejection.
pub(crate) struct SmsSendBody {
    pub(crate) phone: Option<String>,
    pub(crate) message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
/// Nested webhook payload: `{"user": {"phone": ...}, "sms": {"otp": ...}}`.
pub(crate) struct WebhookBody {
    #[serde(default)]
    pub(crate) user: Option<WebhookUser>,
    #[serde(default)]
    pub(crate) sms: Option<WebhookSms>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WebhookUser {
    pub(crate) phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WebhookSms {
    pub(crate) otp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
/// Success body for the bulk send routes.
pub(crate) struct SendOkBody {
    pub(crate) success: bool,
    #[serde(rename = "jobID")]
    pub(crate) job_id: String,
    pub(crate) description: String,
}

#[derive(Debug, Clone, Serialize)]
/// Success body for the OTP route. `jobID` is omitted when the provider
/// did not report one.
pub(crate) struct OtpOkBody {
    pub(crate) success: bool,
    #[serde(rename = "jobID", skip_serializing_if = "Option::is_none")]
    pub(crate) job_id: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
}
