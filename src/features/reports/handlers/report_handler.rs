use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admin::SessionService;
use crate::features::reports::dtos::{
    ReportActionDto, ReportActionResponseDto, SubmitReportDto, SubmitReportResponseDto,
};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportService;
use crate::shared::types::ErrorResponse;

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub session_service: Arc<SessionService>,
}

/// List every report, pending and approved, most recent first
#[utoipa::path(
    get,
    path = "/report/list",
    responses(
        (status = 200, description = "All reports", body = Vec<Report>)
    ),
    tag = "reports"
)]
pub async fn list_reports(State(state): State<ReportState>) -> Result<Json<Vec<Report>>> {
    let reports = state.report_service.list().await?;
    Ok(Json(reports))
}

/// Submit a scam report for moderation
#[utoipa::path(
    post,
    path = "/report/submit",
    request_body = SubmitReportDto,
    responses(
        (status = 200, description = "Report stored as pending", body = SubmitReportResponseDto),
        (status = 400, description = "Missing target or desc", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn submit_report(
    State(state): State<ReportState>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<Json<SubmitReportResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = state
        .report_service
        .submit(dto.into_create_report())
        .await?;

    Ok(Json(SubmitReportResponseDto {
        success: true,
        report,
    }))
}

/// Approve or delete a report (admin session required)
#[utoipa::path(
    post,
    path = "/report/action",
    request_body = ReportActionDto,
    responses(
        (status = 200, description = "Action applied; current collection returned", body = ReportActionResponseDto),
        (status = 403, description = "Invalid or expired session token", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn report_action(
    State(state): State<ReportState>,
    AppJson(dto): AppJson<ReportActionDto>,
) -> Result<Json<ReportActionResponseDto>> {
    let authorized = match dto.token.as_deref() {
        Some(token) => state.session_service.validate(token).await,
        None => false,
    };
    if !authorized {
        return Err(AppError::Forbidden("Unauthorized".to_string()));
    }

    let list = state.report_service.moderate(dto.id, dto.action).await?;
    Ok(Json(ReportActionResponseDto {
        success: true,
        list,
    }))
}
