//! Points and badge rules.
//!
//! Each badge is a one-way latch keyed on a point threshold. Thresholds are
//! checked independently, so one large award can unlock several badges at
//! once, and a badge already held is never removed.

use crate::features::gamification::models::{Badge, UserStats};

/// Outcome of an award
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub stats: UserStats,
    /// Badges unlocked by this award, in threshold order
    pub new_badges: Vec<Badge>,
}

/// Badges a profile with `points` is entitled to, lowest threshold first
pub fn badges_for(points: u32) -> Vec<Badge> {
    Badge::ALL
        .into_iter()
        .filter(|badge| points >= badge.threshold())
        .collect()
}

/// Append any badge the current points qualify for. Returns the new ones.
pub fn refresh_badges(stats: &mut UserStats) -> Vec<Badge> {
    let mut earned = Vec::new();
    for badge in badges_for(stats.points) {
        if !stats.badges.contains(&badge) {
            stats.badges.push(badge);
            earned.push(badge);
        }
    }
    earned
}

pub fn add_points(current: &UserStats, points: u32) -> Award {
    let mut stats = current.clone();
    stats.points = stats.points.saturating_add(points);
    let new_badges = refresh_badges(&mut stats);
    Award { stats, new_badges }
}

/// One submitted report: count it and pay out `reward` points
pub fn award_submission(current: &UserStats, reward: u32) -> Award {
    let mut award = add_points(current, reward);
    award.stats.reports_submitted = award.stats.reports_submitted.saturating_add(1);
    award
}

/// The next badge still to earn and how many points are missing
pub fn next_badge(points: u32) -> Option<(Badge, u32)> {
    Badge::ALL
        .into_iter()
        .find(|badge| points < badge.threshold())
        .map(|badge| (badge, badge.threshold() - points))
}
