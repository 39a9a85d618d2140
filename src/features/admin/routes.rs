use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::SessionService;

/// Create admin session routes (public; the password is the gate)
pub fn routes(service: Arc<SessionService>) -> Router {
    Router::new()
        .route("/admin/login", post(handlers::login))
        .route("/admin/logout", post(handlers::logout))
        .with_state(service)
}
