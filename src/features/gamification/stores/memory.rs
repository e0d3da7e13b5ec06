use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StatsStore, StoreError};
use crate::features::gamification::models::UserStats;

/// Process-local store, lost on restart
#[derive(Default)]
pub struct InMemoryStatsStore {
    profiles: RwLock<HashMap<String, UserStats>>,
}

impl InMemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatsStore for InMemoryStatsStore {
    async fn load(&self, profile: &str) -> Result<Option<UserStats>, StoreError> {
        Ok(self.profiles.read().await.get(profile).cloned())
    }

    async fn save(&self, profile: &str, stats: &UserStats) -> Result<(), StoreError> {
        self.profiles
            .write()
            .await
            .insert(profile.to_string(), stats.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gamification::models::Badge;

    #[tokio::test]
    async fn test_save_then_load() {
        let store = InMemoryStatsStore::new();
        assert_eq!(store.load("rahim").await.unwrap(), None);

        let stats = UserStats {
            reports_submitted: 5,
            points: 50,
            badges: vec![Badge::TrafficHero],
        };
        store.save("rahim", &stats).await.unwrap();

        assert_eq!(store.load("rahim").await.unwrap(), Some(stats));
        assert_eq!(store.load("karim").await.unwrap(), None);
    }
}
