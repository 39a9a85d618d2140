use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::scan::handlers;
use crate::features::scan::services::RiskEvaluator;

/// Create scan routes; `/api/scan` is kept as an alias of `/scan`
pub fn routes(evaluator: Arc<dyn RiskEvaluator>) -> Router {
    Router::new()
        .route("/scan", post(handlers::scan))
        .route("/api/scan", post(handlers::scan))
        .with_state(evaluator)
}
