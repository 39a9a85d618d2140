use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers::admin_handler};
use crate::features::gems::{dtos as gems_dtos, handlers::gem_handler, models as gems_models};
use crate::features::referrals::handlers::referral_handler;
use crate::features::reports::{
    dtos as reports_dtos, handlers::report_handler, models as reports_models,
};
use crate::features::scan::{dtos as scan_dtos, handlers::scan_handler, models as scan_models};
use crate::features::status::handlers::status_handler;
use crate::shared::types::{ErrorResponse, SuccessResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        report_handler::list_reports,
        report_handler::submit_report,
        report_handler::report_action,
        // Admin
        admin_handler::login,
        admin_handler::logout,
        // Gems
        gem_handler::list_gems,
        // Scan
        scan_handler::scan,
        // Referrals
        referral_handler::track_referral,
        // Status
        status_handler::banner,
        status_handler::health_check,
    ),
    components(
        schemas(
            ErrorResponse,
            SuccessResponse,
            reports_models::Report,
            reports_models::ReportStatus,
            reports_models::ModerationAction,
            reports_dtos::SubmitReportDto,
            reports_dtos::SubmitReportResponseDto,
            reports_dtos::ReportActionDto,
            reports_dtos::ReportActionResponseDto,
            admin_dtos::LoginRequestDto,
            admin_dtos::LoginResponseDto,
            admin_dtos::LogoutRequestDto,
            gems_models::TrendingEntry,
            gems_dtos::GemsResponseDto,
            scan_models::RiskAssessment,
            scan_models::RiskLevel,
            scan_dtos::ScanRequestDto,
        )
    ),
    tags(
        (name = "reports", description = "Scam reports and moderation"),
        (name = "admin", description = "Admin sessions"),
        (name = "gems", description = "Trending tokens (cached Birdeye data)"),
        (name = "scan", description = "Simulated address scan"),
        (name = "referrals", description = "Referral tracking"),
        (name = "status", description = "Liveness"),
    ),
    info(
        title = "Gold Guard API",
        version = "0.1.0",
        description = "Scam reports, moderation and trending token lookups",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
