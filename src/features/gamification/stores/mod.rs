//! Persistence port for user stats.

mod json_file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::error::AppError;
use crate::features::gamification::models::UserStats;

pub use json_file::JsonFileStatsStore;
pub use memory::InMemoryStatsStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stats record: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Where user stats live between requests
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// `None` when the profile has never been saved
    async fn load(&self, profile: &str) -> Result<Option<UserStats>, StoreError>;

    async fn save(&self, profile: &str, stats: &UserStats) -> Result<(), StoreError>;
}
