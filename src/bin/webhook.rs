use std::sync::Arc;

use anyhow::Context;
use log::info;
use netgsm_relay::client::NetgsmClient;
use netgsm_relay::relay::{self, WebhookConfig, WebhookState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init_timed();

    let WebhookConfig {
        usercode,
        password,
        header,
        port,
    } = WebhookConfig::from_env()?;

    let state = Arc::new(WebhookState {
        sms: NetgsmClient::new(usercode, password),
        header,
    });

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("SMS webhook listening on {addr}");
    axum::serve(listener, relay::webhook_router(state)).await?;
    Ok(())
}
