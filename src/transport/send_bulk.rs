use serde::Deserialize;
use serde::de::Error as DeError;
use serde_json::json;
use serde_json::value::RawValue;

use crate::domain::{
    BulkSendRequest, BulkSendResponse, MessageHeader, MessageText, RawPhoneNumber, ResultCode,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct BulkSendJsonResponse {
    #[serde(deserialize_with = "scalar_string")]
    code: String,
    #[serde(default, deserialize_with = "opt_scalar_string")]
    jobid: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

// NetGSM is loose with scalar types: `code` and `jobid` show up as either a
// JSON string or a bare number. Numeric tokens are kept verbatim so a job id
// like `8091512211` survives exactly as sent.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match opt_scalar_string(deserializer)? {
        Some(value) => Ok(value),
        None => Err(D::Error::custom("expected a JSON string or number")),
    }
}

fn opt_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;
    let token = raw.get();

    match token.as_bytes().first().copied() {
        Some(b'"') => serde_json::from_str::<String>(token)
            .map(Some)
            .map_err(D::Error::custom),
        Some(b'-' | b'0'..=b'9') => Ok(Some(token.to_owned())),
        Some(b'n') => Ok(None),
        _ => Err(D::Error::custom("expected a JSON string or number")),
    }
}

/// Encode a bulk send request as the NetGSM v2 JSON body.
///
/// `iysfilter` and `partnercode` are serialized even when empty; the API
/// expects the keys to be present.
pub fn encode_bulk_send_json(request: &BulkSendRequest) -> serde_json::Value {
    let messages = request
        .messages()
        .iter()
        .map(|message| {
            json!({
                (MessageText::FIELD): message.text().as_str(),
                (RawPhoneNumber::FIELD): message.recipient().raw(),
            })
        })
        .collect::<Vec<_>>();

    json!({
        (MessageHeader::FIELD): request.header().as_str(),
        "messages": messages,
        "encoding": request.encoding(),
        "iysfilter": request.iys_filter(),
        "partnercode": request.partner_code(),
    })
}

/// Decode a NetGSM bulk send response body.
///
/// `code` and `jobid` arrive as strings in practice but are accepted as
/// numbers too; absent `jobid`/`description` decode to empty strings.
pub fn decode_bulk_send_json_response(json: &str) -> Result<BulkSendResponse, TransportError> {
    let parsed: BulkSendJsonResponse = serde_json::from_str(json)?;

    Ok(BulkSendResponse {
        code: ResultCode::new(parsed.code),
        job_id: parsed.jobid.unwrap_or_default(),
        description: parsed.description.unwrap_or_default(),
    })
}
