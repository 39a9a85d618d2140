use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::gems::handlers;
use crate::features::gems::services::GemService;

/// Create routes for the trending gems feature
pub fn routes(service: Arc<GemService>) -> Router {
    Router::new()
        .route("/api/gems", get(handlers::list_gems))
        .with_state(service)
}
