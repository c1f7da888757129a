use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::client::NetgsmError;
use crate::domain::{OtpCode, ResultCode};

#[derive(Debug, thiserror::Error)]
/// Errors surfaced by the relay routes.
///
/// Each variant renders the JSON body callers expect; provider-facing
/// failures are logged before the response is built.
pub enum ApiError {
    /// Bearer token absent or not an exact match.
    #[error("unauthorized")]
    Unauthorized,

    /// Request body failed field-presence validation.
    #[error("{0}")]
    MissingFields(&'static str),

    /// NetGSM answered the bulk send but rejected the batch.
    #[error("SMS send rejected: {code:?} {description:?}")]
    SmsRejected {
        code: ResultCode,
        description: String,
    },

    /// NetGSM answered the OTP send but rejected the message.
    #[error("OTP send rejected: {code:?} {error:?}")]
    OtpRejected {
        code: OtpCode,
        error: Option<String>,
    },

    /// The HTTP exchange with NetGSM failed outright.
    #[error(transparent)]
    Client(#[from] NetgsmError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            Self::MissingFields(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::SmsRejected { code, description } => {
                log::error!(
                    "NetGSM rejected SMS send: code {} ({description})",
                    code.as_str()
                );
                let error = if description.is_empty() {
                    "SMS failed".to_owned()
                } else {
                    description
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": error, "code": code.as_str() })),
                )
                    .into_response()
            }
            Self::OtpRejected { code, error } => {
                log::error!("NetGSM rejected OTP send: code {}", code.as_i32());
                let error = error
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| "OTP SMS failed".to_owned());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": error, "code": code.as_i32() })),
                )
                    .into_response()
            }
            Self::Client(err) => {
                log::error!("NetGSM request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
