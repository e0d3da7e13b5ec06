use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::gamification::GamificationService;
use crate::features::reports::dtos::{
    CreateReportDto, ListReportsQuery, ReportMutationResponseDto, ReportResponseDto,
    UpdateReportStatusDto,
};
use crate::features::reports::models::IncidentCategory;
use crate::features::reports::services::ReportService;
use crate::shared::types::ErrorResponse;
use crate::shared::validation::validate_profile_name;

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub gamification_service: Arc<GamificationService>,
}

/// List reports, most recently submitted first
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ListReportsQuery),
    responses(
        (status = 200, description = "All reports", body = Vec<ReportResponseDto>),
        (status = 400, description = "Unknown sort order", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    AppQuery(query): AppQuery<ListReportsQuery>,
) -> Json<Vec<ReportResponseDto>> {
    let category = query.category.map(IncidentCategory::from);
    let reports = state
        .report_service
        .list_filtered(category.as_ref(), query.sort)
        .await;
    Json(reports.into_iter().map(Into::into).collect())
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = u64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ReportResponseDto),
        (status = 400, description = "Malformed report ID", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<ReportState>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<ReportResponseDto>> {
    let report = state.report_service.get(id).await?;
    Ok(Json(report.into()))
}

/// Submit a new incident report
///
/// Severity is derived from the category and verification is decided once,
/// here. The report starts out `Pending`. When `profile` is given the
/// profile is credited with the submission reward.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 200, description = "Report created", body = ReportMutationResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(state): State<ReportState>,
    AppJson(mut dto): AppJson<CreateReportDto>,
) -> Result<Json<ReportMutationResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let profile = dto.profile.take();
    if let Some(profile) = profile.as_deref() {
        validate_profile_name(profile)?;
    }

    let report = state.report_service.create(dto.into()).await;
    let report_id = report.id;
    let mut response = ReportMutationResponseDto::from(report);

    if let Some(profile) = profile {
        match state.gamification_service.record_submission(&profile).await {
            Ok(award) => response.award = Some(award),
            // The report stands even if the points could not be stored
            Err(e) => tracing::warn!(
                "Report {} created but points for profile {} not recorded: {}",
                report_id,
                profile,
                e
            ),
        }
    }

    Ok(Json(response))
}

/// Update report status
#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    params(
        ("id" = u64, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ReportMutationResponseDto),
        (status = 400, description = "Malformed ID or unknown status value", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(state): State<ReportState>,
    AppPath(id): AppPath<u64>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ReportMutationResponseDto>> {
    let report = state.report_service.update_status(id, dto.status).await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::reports::routes;
    use crate::features::reports::TransitionPolicy;
    use crate::shared::test_helpers::{in_memory_gamification_service, seeded_report_service};

    fn server(policy: TransitionPolicy) -> TestServer {
        TestServer::new(routes::routes(
            seeded_report_service(policy),
            in_memory_gamification_service(),
        ))
        .unwrap()
    }

    fn pothole_body() -> Value {
        json!({
            "category": "Pothole",
            "location": { "lat": 23.7279, "lng": 90.4053, "address": "Elephant Road" },
            "description": "Deep pothole near the crossing"
        })
    }

    #[tokio::test]
    async fn test_list_returns_seeded_reports_newest_first() {
        let server = server(TransitionPolicy::Enforced);

        let response = server.get("/api/reports").await;
        response.assert_status_ok();

        let reports: Vec<Value> = response.json();
        assert_eq!(reports.len(), 6);
        assert_eq!(reports[0]["id"], 1);
        assert_eq!(reports[0]["reporterId"], "citizen_001");
    }

    #[tokio::test]
    async fn test_list_with_category_and_sort() {
        let server = server(TransitionPolicy::Enforced);

        let response = server
            .get("/api/reports")
            .add_query_param("category", "Illegal Stop")
            .await;
        let reports: Vec<Value> = response.json();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["id"], 6);

        let response = server
            .get("/api/reports")
            .add_query_param("sort", "severity")
            .await;
        let reports: Vec<Value> = response.json();
        let ids: Vec<u64> = reports.iter().filter_map(|r| r["id"].as_u64()).collect();
        assert_eq!(ids, vec![1, 3, 4, 2, 5, 6]);
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_sort_with_json_error() {
        let server = server(TransitionPolicy::Enforced);

        let response = server
            .get("/api/reports")
            .add_query_param("sort", "priority")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_id_is_json_error() {
        let server = server(TransitionPolicy::Enforced);

        let response = server
            .put("/api/reports/abc")
            .json(&json!({ "status": "Resolved" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);

        let response = server.get("/api/reports/-1").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_create_with_profile_awards_points() {
        let server = server(TransitionPolicy::Enforced);

        let mut body = pothole_body();
        body["profile"] = json!("rahim");
        let response = server.post("/api/reports").json(&body).await;
        response.assert_status_ok();

        let created: Value = response.json();
        assert_eq!(created["report"]["id"], 7);
        assert_eq!(created["award"]["profile"], "rahim");
        assert_eq!(created["award"]["pointsAwarded"], 10);
        assert_eq!(created["award"]["stats"]["reportsSubmitted"], 1);

        // Anonymous reports carry no award
        let anonymous: Value = server.post("/api/reports").json(&pothole_body()).await.json();
        assert!(anonymous.get("award").is_none());
    }

    #[tokio::test]
    async fn test_create_with_invalid_profile_creates_nothing() {
        let server = server(TransitionPolicy::Enforced);

        let mut body = pothole_body();
        body["profile"] = json!("../etc/passwd");
        let response = server.post("/api/reports").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let reports: Vec<Value> = server.get("/api/reports").await.json();
        assert_eq!(reports.len(), 6);
    }

    #[tokio::test]
    async fn test_create_places_report_first() {
        let server = server(TransitionPolicy::Enforced);

        let response = server.post("/api/reports").json(&pothole_body()).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["report"]["id"], 7);
        assert_eq!(body["report"]["severity"], 2);
        assert_eq!(body["report"]["status"], "Pending");
        assert_eq!(body["report"]["verified"], true);

        let reports: Vec<Value> = server.get("/api/reports").await.json();
        assert_eq!(reports.len(), 7);
        assert_eq!(reports[0], body["report"]);
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_defaults_severity() {
        let server = server(TransitionPolicy::Enforced);

        let response = server
            .post("/api/reports")
            .json(&json!({
                "category": "Flooding",
                "location": { "lat": 23.7, "lng": 90.4, "address": "Mirpur 10" }
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["report"]["category"], "Flooding");
        assert_eq!(body["report"]["severity"], 1);
        assert_eq!(body["report"]["description"], "");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_location() {
        let server = server(TransitionPolicy::Enforced);

        let response = server
            .post("/api/reports")
            .json(&json!({
                "category": "Accident",
                "location": { "lat": 123.0, "lng": 90.4, "address": "Nowhere" }
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(
            server.get("/api/reports").await.json::<Vec<Value>>().len(),
            6
        );
    }

    #[tokio::test]
    async fn test_update_missing_report_is_not_found() {
        let server = server(TransitionPolicy::Enforced);

        let response = server
            .put("/api/reports/404")
            .json(&json!({ "status": "Resolved" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Report 404 not found");
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_status() {
        let server = server(TransitionPolicy::Permissive);

        let response = server
            .put("/api/reports/2")
            .json(&json!({ "status": "Closed" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let report: Value = server.get("/api/reports/2").await.json();
        assert_eq!(report["status"], "Pending");
    }

    #[tokio::test]
    async fn test_update_rejects_illegal_transition() {
        let server = server(TransitionPolicy::Enforced);

        let response = server
            .put("/api/reports/4")
            .json(&json!({ "status": "Under Review" }))
            .await;
        response.assert_status(StatusCode::CONFLICT);

        let report: Value = server.get("/api/reports/4").await.json();
        assert_eq!(report["status"], "Resolved");
    }

    #[tokio::test]
    async fn test_pothole_lifecycle_end_to_end() {
        let server = server(TransitionPolicy::Enforced);

        let created: Value = server.post("/api/reports").json(&pothole_body()).await.json();
        let original = created["report"].clone();
        let id = original["id"].as_u64().unwrap();
        assert_eq!(original["severity"], 2);

        for status in ["Under Review", "Assigned to DSCC"] {
            let response = server
                .put(&format!("/api/reports/{id}"))
                .json(&json!({ "status": status }))
                .await;
            response.assert_status_ok();
        }

        let mut read: Value = server.get(&format!("/api/reports/{id}")).await.json();
        assert_eq!(read["status"], "Assigned to DSCC");

        // Everything except the status is untouched
        read["status"] = original["status"].clone();
        assert_eq!(read, original);
    }

    #[tokio::test]
    async fn test_permissive_mode_allows_direct_assignment() {
        let server = server(TransitionPolicy::Permissive);

        let created: Value = server.post("/api/reports").json(&pothole_body()).await.json();
        let id = created["report"]["id"].as_u64().unwrap();

        let response = server
            .put(&format!("/api/reports/{id}"))
            .json(&json!({ "status": "Assigned to DSCC" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["report"]["status"], "Assigned to DSCC");
    }
}
