use axum::{routing::get, Router};

use crate::features::realtime::handlers;

/// Create the realtime WebSocket route
pub fn routes() -> Router {
    Router::new().route("/ws", get(handlers::realtime_handler))
}
