use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::risk_zones::models::RiskZone;
use crate::features::risk_zones::services::RiskZoneService;

/// List known risk zones
#[utoipa::path(
    get,
    path = "/api/risk-zones",
    responses(
        (status = 200, description = "Risk zones", body = Vec<RiskZone>)
    ),
    tag = "risk-zones"
)]
pub async fn list_risk_zones(State(service): State<Arc<RiskZoneService>>) -> Json<Vec<RiskZone>> {
    Json(service.list().to_vec())
}
