use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

use crate::domain::{MessageText, OtpCode, OtpCredentials, OtpSendResponse, RawPhoneNumber};

/// Encode an OTP send request as the NetGSM XML body.
///
/// Header fields and the recipient are XML-escaped; the message text stays
/// literal inside a CDATA section, with any embedded `]]>` split across two
/// sections.
pub fn encode_otp_send_xml(
    credentials: &OtpCredentials,
    recipient: &RawPhoneNumber,
    text: &MessageText,
) -> String {
    format!(
        r#"<?xml version="1.0"?>
<mainbody>
  <header>
    <usercode>{usercode}</usercode>
    <password>{password}</password>
    <msgheader>{msgheader}</msgheader>
    <appkey>{appkey}</appkey>
  </header>
  <body>
    <msg><![CDATA[{msg}]]></msg>
    <no>{no}</no>
  </body>
</mainbody>"#,
        usercode = escape(credentials.usercode().as_str()),
        password = escape(credentials.password().as_str()),
        msgheader = escape(credentials.header().as_str()),
        appkey = escape(credentials.appkey().as_str()),
        msg = cdata_safe(text.as_str()),
        no = escape(recipient.raw()),
    )
}

fn cdata_safe(text: &str) -> String {
    text.replace("]]>", "]]]]><![CDATA[>")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Code,
    JobId,
    Error,
}

fn field_for(name: &[u8]) -> Option<Field> {
    match name {
        b"code" => Some(Field::Code),
        b"jobID" => Some(Field::JobId),
        b"error" => Some(Field::Error),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct Captured {
    code: Option<String>,
    job_id: Option<String>,
    error: Option<String>,
}

impl Captured {
    /// First non-blank occurrence of each field wins.
    fn store(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Code => &mut self.code,
            Field::JobId => &mut self.job_id,
            Field::Error => &mut self.error,
        };
        let trimmed = text.trim();
        if slot.is_none() && !trimmed.is_empty() {
            *slot = Some(trimmed.to_owned());
        }
    }

    fn into_response(self) -> OtpSendResponse {
        let code = self
            .code
            .and_then(|text| text.parse::<i32>().ok())
            .map(OtpCode::new)
            .unwrap_or(OtpCode::UNKNOWN);

        OtpSendResponse {
            code,
            job_id: self.job_id,
            error: self.error,
        }
    }
}

/// Extract `<code>`, `<jobID>`, and `<error>` from a NetGSM OTP response.
///
/// Malformed XML or a missing/non-numeric code yields [`OtpCode::UNKNOWN`]
/// alongside whatever fields were captured before the parser gave up. Tag
/// matching is namespace-agnostic but case-sensitive.
pub fn decode_otp_send_xml_response(xml: &str) -> OtpSendResponse {
    let mut reader = Reader::from_str(xml);
    let mut captured = Captured::default();
    let mut current = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => current = field_for(start.local_name().as_ref()),
            Ok(Event::Text(text)) => {
                if let Some(field) = current {
                    if let Ok(value) = text.unescape() {
                        captured.store(field, &value);
                    }
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some(field) = current {
                    captured.store(field, &String::from_utf8_lossy(&cdata));
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => break,
        }
    }

    captured.into_response()
}
