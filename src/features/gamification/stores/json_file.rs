use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{StatsStore, StoreError};
use crate::features::gamification::models::UserStats;

/// One pretty-printed JSON document per profile, `<dir>/<profile>.json`.
///
/// Profile names must already be validated as safe file stems.
pub struct JsonFileStatsStore {
    dir: PathBuf,
}

impl JsonFileStatsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, profile: &str) -> PathBuf {
        self.dir.join(format!("{}.json", profile))
    }
}

#[async_trait]
impl StatsStore for JsonFileStatsStore {
    async fn load(&self, profile: &str) -> Result<Option<UserStats>, StoreError> {
        match tokio::fs::read(self.path_for(profile)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, profile: &str, stats: &UserStats) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write then rename so readers never see a half-written file
        let path = self.path_for(profile);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(stats)?).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Saved stats for profile {} to {}", profile, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gamification::models::Badge;

    #[tokio::test]
    async fn test_missing_profile_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStatsStore::new(dir.path());

        assert!(store.load("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStatsStore::new(dir.path().join("stats"));

        let stats = UserStats {
            reports_submitted: 10,
            points: 100,
            badges: vec![Badge::TrafficHero, Badge::RoadGuardian],
        };
        store.save("rahim", &stats).await.unwrap();

        // A fresh store over the same directory sees the saved record
        let reopened = JsonFileStatsStore::new(store.dir());
        assert_eq!(reopened.load("rahim").await.unwrap(), Some(stats));
    }

    #[tokio::test]
    async fn test_reads_browser_format() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("karim.json"),
            r#"{"reportsSubmitted":6,"points":60,"badges":["Traffic Hero"]}"#,
        )
        .unwrap();

        let store = JsonFileStatsStore::new(dir.path());
        let stats = store.load("karim").await.unwrap().unwrap();
        assert_eq!(stats.points, 60);
        assert_eq!(stats.badges, vec![Badge::TrafficHero]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let store = JsonFileStatsStore::new(dir.path());
        assert!(matches!(
            store.load("broken").await,
            Err(StoreError::Serde(_))
        ));
    }
}
