use axum::{
    extract::ws::{rejection::WebSocketUpgradeRejection, WebSocketUpgrade},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::core::error::AppError;
use crate::features::realtime::handlers::upgrade;
use crate::shared::constants::HEALTH_BANNER;

/// Plain-text banner
///
/// WebSocket upgrades on `/` join the realtime channel instead.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    ),
    tag = "status"
)]
pub async fn banner(ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>) -> Response {
    match ws {
        Ok(ws) => upgrade(ws),
        Err(_) => HEALTH_BANNER.into_response(),
    }
}

/// Simple health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "status"
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// JSON 404 for unknown routes; upgrade requests on any path still reach the realtime channel
pub async fn not_found(
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    uri: Uri,
) -> Response {
    match ws {
        Ok(ws) => upgrade(ws),
        Err(_) => AppError::NotFound(format!("No route for {}", uri.path())).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::status::routes;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        TestServer::builder()
            .http_transport()
            .build(routes::routes().fallback(not_found))
            .unwrap()
    }

    #[tokio::test]
    async fn test_banner_and_health() {
        let server = server();

        let banner = server.get("/").await;
        banner.assert_status_ok();
        banner.assert_text("GOLD GUARD SYSTEM ONLINE 🟢");

        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let server = server();
        let response = server.get("/nope").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "No route for /nope");

        server
            .post("/nope")
            .json(&json!({}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_websocket_upgrade_on_root_and_any_path() {
        let server = server();

        for path in ["/", "/some/client/path"] {
            let mut socket = server.get_websocket(path).await.into_websocket().await;
            let welcome: Value = socket.receive_json().await;
            assert_eq!(
                welcome,
                json!({ "type": "welcome", "message": "Connected to Gold Guard" })
            );
        }

        // Plain requests are unaffected
        server.get("/").await.assert_text("GOLD GUARD SYSTEM ONLINE 🟢");
    }
}
