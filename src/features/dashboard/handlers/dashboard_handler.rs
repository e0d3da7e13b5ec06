use axum::{extract::State, Json};
use std::sync::Arc;

use crate::features::dashboard::dtos::DashboardStatsDto;
use crate::features::dashboard::services::DashboardService;

/// Get aggregate report statistics
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto)
    )
)]
pub async fn get_stats(State(service): State<Arc<DashboardService>>) -> Json<DashboardStatsDto> {
    Json(service.get_stats().await)
}
