mod gamification_dto;

pub use gamification_dto::{BadgeProgressDto, ProfileStatsDto, SubmissionAwardDto};
