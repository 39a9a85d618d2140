use axum::{routing::post, Router};

use crate::features::referrals::handlers;

pub fn routes() -> Router {
    Router::new().route("/referral/track", post(handlers::track_referral))
}
