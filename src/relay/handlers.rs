use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::client::NetgsmClient;
use crate::domain::{BulkSendRequest, MessageHeader, MessageText, OutboundMessage, RawPhoneNumber};

use super::error::ApiError;
use super::types::{OtpOkBody, SendOkBody, SmsSendBody, WebhookBody};
use super::{RelayState, WebhookState};

const MISSING_SMS_FIELDS: &str = "Missing phone or message";
const MISSING_WEBHOOK_FIELDS: &str = "Missing phone or otp";

/// `POST /sms/send`: relay one message through the bulk API.
pub(crate) async fn send_sms(
    State(state): State<Arc<RelayState>>,
    Json(body): Json<SmsSendBody>,
) -> Result<Json<SendOkBody>, ApiError> {
    let (recipient, text) = validate_sms_fields(body)?;
    let sent = relay_bulk_send(&state.sms, &state.header, recipient, text).await?;
    Ok(Json(sent))
}

/// `POST /sms/otp`: relay one message through the OTP API.
pub(crate) async fn send_otp(
    State(state): State<Arc<RelayState>>,
    Json(body): Json<SmsSendBody>,
) -> Result<Json<OtpOkBody>, ApiError> {
    let (recipient, text) = validate_sms_fields(body)?;
    let response = state.otp.send_otp(&recipient, &text).await?;
    if !response.code.is_success() {
        return Err(ApiError::OtpRejected {
            code: response.code,
            error: response.error,
        });
    }
    Ok(Json(OtpOkBody {
        success: true,
        job_id: response.job_id,
        kind: "otp",
    }))
}

/// `POST /sms/send` (webhook flavour): take an auth-service payload and relay
/// the verification code through the bulk API.
pub(crate) async fn webhook_send(
    State(state): State<Arc<WebhookState>>,
    Json(body): Json<WebhookBody>,
) -> Result<Json<SendOkBody>, ApiError> {
    let phone = body.user.and_then(|user| user.phone);
    let otp = body.sms.and_then(|sms| sms.otp);
    let (Some(phone), Some(otp)) = (phone, otp) else {
        return Err(ApiError::MissingFields(MISSING_WEBHOOK_FIELDS));
    };
    if otp.trim().is_empty() {
        return Err(ApiError::MissingFields(MISSING_WEBHOOK_FIELDS));
    }

    // NetGSM expects the number without the leading plus. Trim first so a
    // padded number still loses it.
    let phone = phone.trim();
    let recipient = RawPhoneNumber::new(phone.strip_prefix('+').unwrap_or(phone))
        .map_err(|_| ApiError::MissingFields(MISSING_WEBHOOK_FIELDS))?;
    let text = MessageText::new(format!("Kodunuz: {otp}"))
        .map_err(|_| ApiError::MissingFields(MISSING_WEBHOOK_FIELDS))?;

    let sent = relay_bulk_send(&state.sms, &state.header, recipient, text).await?;
    Ok(Json(sent))
}

/// `GET /health`: liveness probe, open on both routers.
pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn validate_sms_fields(body: SmsSendBody) -> Result<(RawPhoneNumber, MessageText), ApiError> {
    let (Some(phone), Some(message)) = (body.phone, body.message) else {
        return Err(ApiError::MissingFields(MISSING_SMS_FIELDS));
    };
    let recipient =
        RawPhoneNumber::new(phone).map_err(|_| ApiError::MissingFields(MISSING_SMS_FIELDS))?;
    let text =
        MessageText::new(message).map_err(|_| ApiError::MissingFields(MISSING_SMS_FIELDS))?;
    Ok((recipient, text))
}

async fn relay_bulk_send(
    client: &NetgsmClient,
    header: &MessageHeader,
    recipient: RawPhoneNumber,
    text: MessageText,
) -> Result<SendOkBody, ApiError> {
    let request = BulkSendRequest::new(header.clone(), vec![OutboundMessage::new(text, recipient)]);
    let response = client.send(&request).await?;
    if !response.code.is_success() {
        return Err(ApiError::SmsRejected {
            code: response.code,
            description: response.description,
        });
    }
    Ok(SendOkBody {
        success: true,
        job_id: response.job_id,
        description: response.description,
    })
}
