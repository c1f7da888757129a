use std::sync::Arc;
use std::time::Duration;

use crate::domain::{MessageText, OtpCredentials, OtpSendResponse, RawPhoneNumber};

use super::{HttpTransport, NetgsmError, ReqwestTransport};

// Unlike the bulk API, NetGSM serves OTP sends from a single fixed URL.
const OTP_SEND_ENDPOINT: &str = "https://api.netgsm.com.tr/sms/send/otp";

#[derive(Debug, Clone)]
/// Builder for [`NetgsmOtpClient`].
pub struct NetgsmOtpClientBuilder {
    credentials: OtpCredentials,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NetgsmOtpClientBuilder {
    /// Create a builder with no timeout/user-agent override.
    pub fn new(credentials: OtpCredentials) -> Self {
        Self {
            credentials,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NetgsmOtpClient`].
    pub fn build(self) -> Result<NetgsmOtpClient, NetgsmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NetgsmError::Transport(Box::new(err)))?;

        Ok(NetgsmOtpClient {
            credentials: self.credentials,
            endpoint: OTP_SEND_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Client for the NetGSM OTP send API (`sms/send/otp`).
///
/// Credentials travel inside the XML body rather than as HTTP auth, and the
/// response comes back as XML.
pub struct NetgsmOtpClient {
    credentials: OtpCredentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl NetgsmOtpClient {
    /// Create a client for the NetGSM OTP endpoint.
    pub fn new(credentials: OtpCredentials) -> Self {
        Self {
            credentials,
            endpoint: OTP_SEND_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: OtpCredentials) -> NetgsmOtpClientBuilder {
        NetgsmOtpClientBuilder::new(credentials)
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        credentials: OtpCredentials,
        endpoint: impl Into<String>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Send a one-time password message through NetGSM.
    ///
    /// The response is decoded leniently: a body without a parseable
    /// `<code>` element comes back as [`crate::domain::OtpCode::UNKNOWN`]
    /// rather than a parse error. Errors cover the HTTP exchange itself.
    pub async fn send_otp(
        &self,
        recipient: &RawPhoneNumber,
        text: &MessageText,
    ) -> Result<OtpSendResponse, NetgsmError> {
        let body = crate::transport::encode_otp_send_xml(&self.credentials, recipient, text);

        let response = self
            .http
            .post_xml(&self.endpoint, body)
            .await
            .map_err(NetgsmError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(NetgsmError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(crate::transport::decode_otp_send_xml_response(
            &response.body,
        ))
    }
}
