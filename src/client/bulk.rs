use std::sync::Arc;
use std::time::Duration;

use crate::domain::{BulkSendRequest, BulkSendResponse, Password, UserCode};

use super::{BasicAuth, HttpTransport, NetgsmError, ReqwestTransport};

const DEFAULT_SEND_ENDPOINT: &str = "https://api.netgsm.com.tr/sms/rest/v2/send";

#[derive(Debug, Clone)]
/// Builder for [`NetgsmClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct NetgsmClientBuilder {
    usercode: UserCode,
    password: Password,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NetgsmClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(usercode: UserCode, password: Password) -> Self {
        Self {
            usercode,
            password,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the bulk send endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
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

    /// Build a [`NetgsmClient`].
    pub fn build(self) -> Result<NetgsmClient, NetgsmError> {
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

        Ok(NetgsmClient {
            usercode: self.usercode,
            password: self.password,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Client for the NetGSM bulk JSON send API (`sms/rest/v2/send`).
///
/// Credentials travel as HTTP Basic auth; the request body carries the
/// header, messages, and encoding.
pub struct NetgsmClient {
    usercode: UserCode,
    password: Password,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl NetgsmClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`NetgsmClient::builder`].
    pub fn new(usercode: UserCode, password: Password) -> Self {
        Self {
            usercode,
            password,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(usercode: UserCode, password: Password) -> NetgsmClientBuilder {
        NetgsmClientBuilder::new(usercode, password)
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        usercode: UserCode,
        password: Password,
        endpoint: impl Into<String>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            usercode,
            password,
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Submit a bulk send request to NetGSM.
    ///
    /// A parsed response is returned even when the provider rejected the
    /// batch; check [`BulkSendResponse::code`] (acceptance is reported as
    /// `"00"`). Errors cover the HTTP exchange itself:
    /// - [`NetgsmError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`NetgsmError::Parse`] when the body is not the expected JSON.
    pub async fn send(&self, request: &BulkSendRequest) -> Result<BulkSendResponse, NetgsmError> {
        let body = crate::transport::encode_bulk_send_json(request);
        let auth = BasicAuth {
            username: self.usercode.as_str(),
            password: self.password.as_str(),
        };

        let response = self
            .http
            .post_json(&self.endpoint, auth, &body)
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

        crate::transport::decode_bulk_send_json_response(&response.body)
            .map_err(|err| NetgsmError::Parse(Box::new(err)))
    }
}
