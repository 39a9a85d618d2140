use axum::{routing::get, Router};

use crate::features::status::handlers;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::banner))
        .route("/health", get(handlers::health_check))
}
