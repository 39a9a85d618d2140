use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::features::scan::dtos::ScanRequestDto;
use crate::features::scan::models::RiskAssessment;
use crate::features::scan::services::RiskEvaluator;

/// Scan an address (simulated)
///
/// Returns a placeholder verdict whatever the body holds. No on-chain data is read.
#[utoipa::path(
    post,
    path = "/scan",
    request_body = ScanRequestDto,
    responses(
        (status = 200, description = "Simulated risk verdict", body = RiskAssessment)
    ),
    tag = "scan"
)]
pub async fn scan(
    State(evaluator): State<Arc<dyn RiskEvaluator>>,
    body: Bytes,
) -> Json<RiskAssessment> {
    let address = serde_json::from_slice::<ScanRequestDto>(&body)
        .ok()
        .and_then(|dto| dto.address)
        .unwrap_or_default();
    let assessment = evaluator.evaluate(&address).await;

    tracing::info!(
        "Scan requested: address={}, evaluator={}, risk={:?}",
        address,
        evaluator.name(),
        assessment.risk
    );

    Json(assessment)
}
