//! HTTP relay surface: axum routers, shared state, and bearer auth.

mod config;
mod error;
mod handlers;
mod types;

pub use config::{ConfigError, DEFAULT_PORT, RelayConfig, WebhookConfig};
pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::client::{NetgsmClient, NetgsmOtpClient};
use crate::domain::{MessageHeader, SecretToken};

#[derive(Clone)]
/// Shared state behind the token-guarded relay routes.
pub struct RelayState {
    pub sms: NetgsmClient,
    pub otp: NetgsmOtpClient,
    pub header: MessageHeader,
    pub secret: SecretToken,
}

#[derive(Clone)]
/// Shared state behind the open webhook routes.
pub struct WebhookState {
    pub sms: NetgsmClient,
    pub header: MessageHeader,
}

/// Build the token-guarded relay router.
///
/// `POST /sms/send` and `POST /sms/otp` sit behind [`require_bearer`];
/// `GET /health` stays open.
pub fn router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route("/sms/send", post(handlers::send_sms))
        .route("/sms/otp", post(handlers::send_otp))
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the open webhook router. No auth on any route.
pub fn webhook_router(state: Arc<WebhookState>) -> Router {
    Router::new()
        .route("/sms/send", post(handlers::webhook_send))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Reject any request whose `Authorization` header is not exactly
/// `Bearer <secret>`.
async fn require_bearer(
    State(state): State<Arc<RelayState>>,
    request: Request,
    next: Next,
) -> Response {
    let expected = format!("Bearer {}", state.secret.as_str());
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        return ApiError::Unauthorized.into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::client::{FakeTransport, NetgsmClient, NetgsmOtpClient};
    use crate::domain::{AppKey, MessageHeader, OtpCredentials, Password, SecretToken, UserCode};

    use super::*;

    const SECRET: &str = "relay-secret-token";

    const BULK_OK: &str = r#"{"code":"00","jobid":"10662511","description":"Success"}"#;
    const BULK_REJECTED: &str = r#"{"code":"30","jobid":"","description":"Abone bilgileri hatali"}"#;
    const OTP_OK: &str = "<xml><main><code>0</code><jobID>428</jobID></main></xml>";
    const OTP_OK_NO_JOB: &str = "<xml><main><code>0</code></main></xml>";
    const OTP_REJECTED: &str =
        "<xml><main><code>30</code><error>gecersiz kullanici</error></main></xml>";

    fn netgsm_client(transport: &FakeTransport) -> NetgsmClient {
        NetgsmClient::with_transport(
            UserCode::new("8503020000").unwrap(),
            Password::new("hunter2").unwrap(),
            "https://netgsm.test/sms/rest/v2/send",
            Arc::new(transport.clone()),
        )
    }

    fn otp_client(transport: &FakeTransport) -> NetgsmOtpClient {
        let credentials = OtpCredentials::new(
            UserCode::new("8503020000").unwrap(),
            Password::new("hunter2").unwrap(),
            MessageHeader::new("Baslik").unwrap(),
            AppKey::new("appkey1").unwrap(),
        );
        NetgsmOtpClient::with_transport(
            credentials,
            "https://netgsm.test/sms/send/otp",
            Arc::new(transport.clone()),
        )
    }

    fn relay_app(bulk: &FakeTransport, otp: &FakeTransport) -> Router {
        let state = Arc::new(RelayState {
            sms: netgsm_client(bulk),
            otp: otp_client(otp),
            header: MessageHeader::new("Baslik").unwrap(),
            secret: SecretToken::new(SECRET).unwrap(),
        });
        router(state)
    }

    fn webhook_app(bulk: &FakeTransport) -> Router {
        let state = Arc::new(WebhookState {
            sms: netgsm_client(bulk),
            header: MessageHeader::new("Baslik").unwrap(),
        });
        webhook_router(state)
    }

    fn post_json(uri: &str, bearer: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_open_on_both_routers() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_OK);
        for app in [relay_app(&bulk, &otp), webhook_app(&bulk)] {
            let request = Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap();
            let response = app.oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!({ "status": "ok" }));
        }
        assert_eq!(bulk.call_count(), 0);
        assert_eq!(otp.call_count(), 0);
    }

    #[tokio::test]
    async fn send_rejects_a_missing_bearer() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "hello" });
        let response = app.oneshot(post_json("/sms/send", None, body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
        assert_eq!(bulk.call_count(), 0);
    }

    #[tokio::test]
    async fn otp_rejects_a_wrong_bearer() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "hello" });
        let response = app
            .oneshot(post_json("/sms/otp", Some("not-the-token"), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
        assert_eq!(otp.call_count(), 0);
    }

    #[tokio::test]
    async fn send_requires_phone_and_message() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567" });
        let response = app
            .oneshot(post_json("/sms/send", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing phone or message" })
        );
        assert_eq!(bulk.call_count(), 0);
    }

    #[tokio::test]
    async fn send_relays_an_accepted_message() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "hello there" });
        let response = app
            .oneshot(post_json("/sms/send", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "jobID": "10662511", "description": "Success" })
        );

        let call = bulk.last_call().unwrap();
        assert_eq!(call.url, "https://netgsm.test/sms/rest/v2/send");
        assert_eq!(
            call.auth,
            Some(("8503020000".to_owned(), "hunter2".to_owned()))
        );
        assert_eq!(call.content_type, "application/json");
        assert_eq!(
            call.body_json(),
            json!({
                "msgheader": "Baslik",
                "messages": [{ "msg": "hello there", "no": "905551234567" }],
                "encoding": "TR",
                "iysfilter": "",
                "partnercode": ""
            })
        );
    }

    #[tokio::test]
    async fn send_maps_a_provider_rejection_to_500() {
        let bulk = FakeTransport::new(200, BULK_REJECTED);
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "hello" });
        let response = app
            .oneshot(post_json("/sms/send", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Abone bilgileri hatali", "code": "30" })
        );
    }

    #[tokio::test]
    async fn send_falls_back_to_a_generic_rejection_message() {
        let bulk = FakeTransport::new(200, r#"{"code":"40"}"#);
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "hello" });
        let response = app
            .oneshot(post_json("/sms/send", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "SMS failed", "code": "40" })
        );
    }

    #[tokio::test]
    async fn send_maps_an_http_failure_to_500() {
        let bulk = FakeTransport::new(502, "bad gateway");
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "hello" });
        let response = app
            .oneshot(post_json("/sms/send", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "unexpected HTTP status: 502" })
        );
    }

    #[tokio::test]
    async fn otp_relays_an_accepted_send() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_OK);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "code 123456" });
        let response = app
            .oneshot(post_json("/sms/otp", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "jobID": "428", "type": "otp" })
        );
        assert_eq!(bulk.call_count(), 0);

        let call = otp.last_call().unwrap();
        assert_eq!(call.url, "https://netgsm.test/sms/send/otp");
        assert_eq!(call.auth, None);
        assert_eq!(call.content_type, "text/xml");
        assert!(call.body.contains("<usercode>8503020000</usercode>"));
        assert!(call.body.contains("<![CDATA[code 123456]]>"));
        assert!(call.body.contains("<no>905551234567</no>"));
    }

    #[tokio::test]
    async fn otp_omits_job_id_when_the_provider_does() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_OK_NO_JOB);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "code 123456" });
        let response = app
            .oneshot(post_json("/sms/otp", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "type": "otp" })
        );
    }

    #[tokio::test]
    async fn otp_maps_a_provider_rejection_to_500() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, OTP_REJECTED);
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "code 123456" });
        let response = app
            .oneshot(post_json("/sms/otp", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "gecersiz kullanici", "code": 30 })
        );
    }

    #[tokio::test]
    async fn otp_maps_an_unreadable_body_to_the_sentinel_code() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let otp = FakeTransport::new(200, "everything is on fire");
        let app = relay_app(&bulk, &otp);

        let body = json!({ "phone": "905551234567", "message": "code 123456" });
        let response = app
            .oneshot(post_json("/sms/otp", Some(SECRET), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "OTP SMS failed", "code": -1 })
        );
    }

    #[tokio::test]
    async fn webhook_relays_without_auth_and_strips_the_plus() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let app = webhook_app(&bulk);

        let body = json!({ "user": { "phone": "+905551234567" }, "sms": { "otp": "123456" } });
        let response = app.oneshot(post_json("/sms/send", None, body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "jobID": "10662511", "description": "Success" })
        );

        let call = bulk.last_call().unwrap();
        assert_eq!(
            call.body_json()["messages"],
            json!([{ "msg": "Kodunuz: 123456", "no": "905551234567" }])
        );
    }

    #[tokio::test]
    async fn webhook_strips_the_plus_from_a_padded_number() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let app = webhook_app(&bulk);

        let body = json!({ "user": { "phone": " +905551234567 " }, "sms": { "otp": "123456" } });
        let response = app.oneshot(post_json("/sms/send", None, body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let call = bulk.last_call().unwrap();
        assert_eq!(
            call.body_json()["messages"],
            json!([{ "msg": "Kodunuz: 123456", "no": "905551234567" }])
        );
    }

    #[tokio::test]
    async fn webhook_requires_nested_fields() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let app = webhook_app(&bulk);

        let body = json!({ "user": { "phone": "905551234567" } });
        let response = app.oneshot(post_json("/sms/send", None, body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing phone or otp" })
        );
        assert_eq!(bulk.call_count(), 0);
    }

    #[tokio::test]
    async fn webhook_rejects_a_blank_otp() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let app = webhook_app(&bulk);

        let body = json!({ "user": { "phone": "905551234567" }, "sms": { "otp": "  " } });
        let response = app.oneshot(post_json("/sms/send", None, body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Missing phone or otp" })
        );
        assert_eq!(bulk.call_count(), 0);
    }

    #[tokio::test]
    async fn webhook_rejects_a_bare_plus_phone() {
        let bulk = FakeTransport::new(200, BULK_OK);
        let app = webhook_app(&bulk);

        let body = json!({ "user": { "phone": "+" }, "sms": { "otp": "123456" } });
        let response = app.oneshot(post_json("/sms/send", None, body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bulk.call_count(), 0);
    }
}
