use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::{LoginRequestDto, LoginResponseDto, LogoutRequestDto};
use crate::features::admin::services::SessionService;
use crate::shared::types::{ErrorResponse, SuccessResponse};

/// Admin login
///
/// Exchanges the admin password for a moderation session token.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 401, description = "Invalid password", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn login(
    State(service): State<Arc<SessionService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<LoginResponseDto>> {
    let token = service.login(&dto.password).await?;
    Ok(Json(LoginResponseDto {
        success: true,
        token,
    }))
}

/// Admin logout
///
/// Revokes a session token. `success` is false when the token was unknown.
#[utoipa::path(
    post,
    path = "/admin/logout",
    request_body = LogoutRequestDto,
    responses(
        (status = 200, description = "Token revoked", body = SuccessResponse)
    ),
    tag = "admin"
)]
pub async fn logout(
    State(service): State<Arc<SessionService>>,
    AppJson(dto): AppJson<LogoutRequestDto>,
) -> Json<SuccessResponse> {
    let success = service.revoke(&dto.token).await;
    Json(SuccessResponse { success })
}

#[cfg(test)]
mod tests {
    use crate::features::admin::routes;
    use crate::shared::test_helpers::create_session_service;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        TestServer::new(routes::routes(create_session_service())).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let server = server();
        let response = server
            .post("/admin/login")
            .json(&json!({ "password": "GOLD" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_401() {
        let server = server();
        let response = server
            .post("/admin/login")
            .json(&json!({ "password": "nope" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_logout_reports_revocation() {
        let server = server();
        let login: Value = server
            .post("/admin/login")
            .json(&json!({ "password": "GOLD" }))
            .await
            .json();
        let token = login["token"].as_str().unwrap().to_string();

        let first: Value = server
            .post("/admin/logout")
            .json(&json!({ "token": token }))
            .await
            .json();
        let second: Value = server
            .post("/admin/logout")
            .json(&json!({ "token": token }))
            .await
            .json();

        assert_eq!(first["success"], true);
        assert_eq!(second["success"], false);
    }
}
