use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::gamification::models::{Badge, UserStats};

/// Progress towards the next badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProgressDto {
    pub badge: Badge,
    pub threshold: u32,
    pub points_needed: u32,
}

/// Stats of one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsDto {
    pub profile: String,
    pub stats: UserStats,
    /// Absent once every badge is earned
    pub next_badge: Option<BadgeProgressDto>,
}

/// Stats after a recorded submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAwardDto {
    #[serde(flatten)]
    pub profile: ProfileStatsDto,
    pub points_awarded: u32,
    /// Badges unlocked by this submission
    pub new_badges: Vec<Badge>,
}
