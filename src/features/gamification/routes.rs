use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::gamification::handlers;
use crate::features::gamification::services::GamificationService;

/// Create routes for profile points and badges
pub fn routes(service: Arc<GamificationService>) -> Router {
    Router::new()
        .route("/api/profiles/{name}/stats", get(handlers::get_profile_stats))
        .route(
            "/api/profiles/{name}/submissions",
            post(handlers::record_submission),
        )
        .with_state(service)
}
