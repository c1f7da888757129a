use std::sync::Arc;

use anyhow::Context;
use log::info;
use netgsm_relay::client::{NetgsmClient, NetgsmOtpClient};
use netgsm_relay::domain::OtpCredentials;
use netgsm_relay::relay::{self, RelayConfig, RelayState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init_timed();

    let RelayConfig {
        usercode,
        password,
        header,
        appkey,
        secret,
        port,
    } = RelayConfig::from_env()?;

    let sms = NetgsmClient::new(usercode.clone(), password.clone());
    let otp = NetgsmOtpClient::new(OtpCredentials::new(
        usercode,
        password,
        header.clone(),
        appkey,
    ));
    let state = Arc::new(RelayState {
        sms,
        otp,
        header,
        secret,
    });

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("SMS relay listening on {addr}");
    axum::serve(listener, relay::router(state)).await?;
    Ok(())
}
