use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::risk_zones::handlers;
use crate::features::risk_zones::services::RiskZoneService;

/// Create public risk zone routes
pub fn routes(service: Arc<RiskZoneService>) -> Router {
    Router::new()
        .route("/api/risk-zones", get(handlers::list_risk_zones))
        .with_state(service)
}
