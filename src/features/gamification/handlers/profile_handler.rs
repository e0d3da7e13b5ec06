use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::gamification::dtos::{ProfileStatsDto, SubmissionAwardDto};
use crate::features::gamification::services::GamificationService;
use crate::shared::types::ErrorResponse;

/// Get points and badges for a profile
#[utoipa::path(
    get,
    path = "/api/profiles/{name}/stats",
    params(
        ("name" = String, Path, description = "Profile name")
    ),
    responses(
        (status = 200, description = "Profile stats", body = ProfileStatsDto),
        (status = 400, description = "Invalid profile name", body = ErrorResponse)
    ),
    tag = "profiles"
)]
pub async fn get_profile_stats(
    State(service): State<Arc<GamificationService>>,
    AppPath(name): AppPath<String>,
) -> Result<Json<ProfileStatsDto>> {
    let profile = service.get_profile(&name).await?;
    Ok(Json(profile))
}

/// Record a report submission for a profile
///
/// Awards the fixed submission reward and unlocks any badge the new total
/// qualifies for.
#[utoipa::path(
    post,
    path = "/api/profiles/{name}/submissions",
    params(
        ("name" = String, Path, description = "Profile name")
    ),
    responses(
        (status = 200, description = "Submission recorded", body = SubmissionAwardDto),
        (status = 400, description = "Invalid profile name", body = ErrorResponse),
        (status = 500, description = "Stats could not be stored", body = ErrorResponse)
    ),
    tag = "profiles"
)]
pub async fn record_submission(
    State(service): State<Arc<GamificationService>>,
    AppPath(name): AppPath<String>,
) -> Result<Json<SubmissionAwardDto>> {
    let award = service.record_submission(&name).await?;
    Ok(Json(award))
}
