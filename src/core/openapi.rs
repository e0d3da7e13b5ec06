use utoipa::{Modify, OpenApi};

use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::gamification::{
    dtos as gamification_dtos, handlers as gamification_handlers, models as gamification_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::risk_zones::{handlers as risk_zones_handlers, models as risk_zones_models};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::update_report_status,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_stats,
        // Risk zones
        risk_zones_handlers::risk_zone_handler::list_risk_zones,
        // Profiles
        gamification_handlers::profile_handler::get_profile_stats,
        gamification_handlers::profile_handler::record_submission,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportSort,
            reports_dtos::LocationDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::ReportMutationResponseDto,
            // Dashboard
            dashboard_dtos::DashboardStatsDto,
            // Risk zones
            risk_zones_models::RiskZone,
            // Profiles
            gamification_models::Badge,
            gamification_models::UserStats,
            gamification_dtos::BadgeProgressDto,
            gamification_dtos::ProfileStatsDto,
            gamification_dtos::SubmissionAwardDto,
        )
    ),
    tags(
        (name = "reports", description = "Traffic incident reports and their status lifecycle"),
        (name = "Dashboard", description = "Aggregate report statistics"),
        (name = "risk-zones", description = "Known high-risk traffic areas"),
        (name = "profiles", description = "Points and badges for reporters"),
    ),
    info(
        title = "TrafficBondhu API",
        version = "0.1.0",
        description = "Citizen traffic incident reporting API",
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
