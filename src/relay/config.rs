//! Environment-driven configuration for the relay binaries.

use std::env;

use crate::domain::{AppKey, MessageHeader, Password, SecretToken, UserCode, ValidationError};

/// Port the relay binds when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 4400;

const DEFAULT_HEADER: &str = "Baslik";
const DEFAULT_APPKEY: &str = "xxx";

#[derive(Debug, thiserror::Error)]
/// Environment problems that keep a relay binary from booting.
pub enum ConfigError {
    #[error("environment variable {name} is not set")]
    MissingVar { name: &'static str },

    #[error("environment variable {name} is invalid")]
    InvalidVar {
        name: &'static str,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone)]
/// Settings for the token-guarded relay.
pub struct RelayConfig {
    pub usercode: UserCode,
    pub password: Password,
    pub header: MessageHeader,
    pub appkey: AppKey,
    pub secret: SecretToken,
    pub port: u16,
}

impl RelayConfig {
    /// Reads the relay settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            usercode: required("NETGSM_USERNAME", UserCode::new)?,
            password: required("NETGSM_PASSWORD", Password::new)?,
            header: defaulted("NETGSM_SMSHEADER", DEFAULT_HEADER, MessageHeader::new)?,
            appkey: defaulted("NETGSM_APPKEY", DEFAULT_APPKEY, AppKey::new)?,
            secret: required("SECRET_TOKEN", SecretToken::new)?,
            port: port_from_env(),
        })
    }
}

#[derive(Debug, Clone)]
/// Settings for the open webhook receiver.
pub struct WebhookConfig {
    pub usercode: UserCode,
    pub password: Password,
    pub header: MessageHeader,
    pub port: u16,
}

impl WebhookConfig {
    /// Reads the webhook settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            usercode: required("NETGSM_USERNAME", UserCode::new)?,
            password: required("NETGSM_PASSWORD", Password::new)?,
            header: defaulted("NETGSM_SMSHEADER", DEFAULT_HEADER, MessageHeader::new)?,
            port: port_from_env(),
        })
    }
}

fn required<T>(
    name: &'static str,
    parse: impl FnOnce(String) -> Result<T, ValidationError>,
) -> Result<T, ConfigError> {
    let value = env::var(name).map_err(|_| ConfigError::MissingVar { name })?;
    parse(value).map_err(|source| ConfigError::InvalidVar { name, source })
}

// An empty variable falls back to the default, same as an unset one.
fn defaulted<T>(
    name: &'static str,
    default: &'static str,
    parse: impl FnOnce(String) -> Result<T, ValidationError>,
) -> Result<T, ConfigError> {
    let value = match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_owned(),
    };
    parse(value).map_err(|source| ConfigError::InvalidVar { name, source })
}

fn port_from_env() -> u16 {
    parse_port(env::var("PORT").ok())
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
