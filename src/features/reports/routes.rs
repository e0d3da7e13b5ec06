use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::gamification::GamificationService;
use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Reports that name a profile credit it through the gamification service
pub fn routes(
    report_service: Arc<ReportService>,
    gamification_service: Arc<GamificationService>,
) -> Router {
    let state = ReportState {
        report_service,
        gamification_service,
    };

    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::get_report).put(handlers::update_report_status),
        )
        .with_state(state)
}
