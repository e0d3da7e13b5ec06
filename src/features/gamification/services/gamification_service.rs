use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::error::Result;
use crate::features::gamification::dtos::{BadgeProgressDto, ProfileStatsDto, SubmissionAwardDto};
use crate::features::gamification::engine;
use crate::features::gamification::models::UserStats;
use crate::features::gamification::stores::StatsStore;
use crate::shared::validation::validate_profile_name;

/// Service for profile points and badges
pub struct GamificationService {
    store: Arc<dyn StatsStore>,
    points_per_submission: u32,
    /// Serializes load-award-save cycles
    update_lock: Mutex<()>,
}

impl GamificationService {
    pub fn new(store: Arc<dyn StatsStore>, points_per_submission: u32) -> Self {
        Self {
            store,
            points_per_submission,
            update_lock: Mutex::new(()),
        }
    }

    /// Current stats; profiles never seen before start at zero
    pub async fn get_profile(&self, profile: &str) -> Result<ProfileStatsDto> {
        validate_profile_name(profile)?;
        let stats = self.load(profile).await?;
        Ok(profile_dto(profile, stats))
    }

    /// Count one submitted report for the profile
    pub async fn record_submission(&self, profile: &str) -> Result<SubmissionAwardDto> {
        validate_profile_name(profile)?;

        let _guard = self.update_lock.lock().await;
        let current = self.load(profile).await?;
        let award = engine::award_submission(&current, self.points_per_submission);
        self.store.save(profile, &award.stats).await?;

        if award.new_badges.is_empty() {
            tracing::info!(
                "Submission recorded: profile={}, points={}",
                profile,
                award.stats.points
            );
        } else {
            tracing::info!(
                "Submission recorded: profile={}, points={}, new_badges={:?}",
                profile,
                award.stats.points,
                award.new_badges
            );
        }

        Ok(SubmissionAwardDto {
            profile: profile_dto(profile, award.stats),
            points_awarded: self.points_per_submission,
            new_badges: award.new_badges,
        })
    }

    async fn load(&self, profile: &str) -> Result<UserStats> {
        Ok(self.store.load(profile).await?.unwrap_or_default())
    }
}

fn profile_dto(profile: &str, stats: UserStats) -> ProfileStatsDto {
    let next_badge = engine::next_badge(stats.points).map(|(badge, points_needed)| {
        BadgeProgressDto {
            badge,
            threshold: badge.threshold(),
            points_needed,
        }
    });

    ProfileStatsDto {
        profile: profile.to_string(),
        stats,
        next_badge,
    }
}
