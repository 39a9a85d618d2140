use axum::Json;

use crate::shared::types::SuccessResponse;

/// Track a referral (no-op)
#[utoipa::path(
    post,
    path = "/referral/track",
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse)
    ),
    tag = "referrals"
)]
pub async fn track_referral() -> Json<SuccessResponse> {
    tracing::debug!("Referral track received");
    Json(SuccessResponse::ok())
}
