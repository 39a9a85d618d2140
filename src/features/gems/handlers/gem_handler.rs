use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::gems::dtos::GemsResponseDto;
use crate::features::gems::services::GemService;

/// List trending tokens
///
/// Served from a short-lived cache. Upstream outages return the last good
/// list (or an empty one), never an error.
#[utoipa::path(
    get,
    path = "/api/gems",
    responses(
        (status = 200, description = "Trending tokens", body = GemsResponseDto)
    ),
    tag = "gems"
)]
pub async fn list_gems(State(service): State<Arc<GemService>>) -> Json<GemsResponseDto> {
    Json(service.get_gems().await.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::features::gems::routes;
    use crate::features::gems::{GemService, TrendingProvider};
    use crate::shared::test_helpers::{sample_tokens, FakeTrendingProvider};
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_list_gems_shape() {
        let provider: Arc<dyn TrendingProvider> =
            Arc::new(FakeTrendingProvider::new(sample_tokens()));
        let service = Arc::new(GemService::new(Some(provider), Duration::from_secs(5), 10));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server.get("/api/gems").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 2);
        assert_eq!(body["gems"][0]["symbol"], "AAA");
        assert_eq!(body["gems"][0]["score"], 100);
        assert!(body["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_list_gems_without_credential() {
        let service = Arc::new(GemService::new(None, Duration::from_secs(5), 10));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let body: Value = server.get("/api/gems").await.json();
        assert_eq!(body["count"], 0);
        assert_eq!(body["gems"].as_array().unwrap().len(), 0);
        assert!(body["updated_at"].is_null());
    }

    #[tokio::test]
    async fn test_list_gems_upstream_failure_is_still_200() {
        let fake = Arc::new(FakeTrendingProvider::new(sample_tokens()));
        fake.set_failing(true);
        let provider: Arc<dyn TrendingProvider> = fake;
        let service = Arc::new(GemService::new(Some(provider), Duration::from_secs(5), 10));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server.get("/api/gems").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["count"], 0);
    }
}
