use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::admin::SessionService;
use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Listing and submission are public; `/report/action` checks the session
/// token carried in the body.
pub fn routes(report_service: Arc<ReportService>, session_service: Arc<SessionService>) -> Router {
    let state = ReportState {
        report_service,
        session_service,
    };

    Router::new()
        .route("/report/list", get(handlers::list_reports))
        .route("/report/submit", post(handlers::submit_report))
        .route("/report/action", post(handlers::report_action))
        .with_state(state)
}
