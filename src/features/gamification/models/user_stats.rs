use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Achievement unlocked by reaching a point threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Badge {
    #[serde(rename = "Traffic Hero")]
    TrafficHero,
    #[serde(rename = "Road Guardian")]
    RoadGuardian,
    #[serde(rename = "Safety Champion")]
    SafetyChampion,
}

impl Badge {
    /// Every badge, lowest threshold first
    pub const ALL: [Badge; 3] = [Badge::TrafficHero, Badge::RoadGuardian, Badge::SafetyChampion];

    pub fn threshold(&self) -> u32 {
        match self {
            Badge::TrafficHero => 50,
            Badge::RoadGuardian => 100,
            Badge::SafetyChampion => 200,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Badge::TrafficHero => "Traffic Hero",
            Badge::RoadGuardian => "Road Guardian",
            Badge::SafetyChampion => "Safety Champion",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Points and badges of one profile.
///
/// Every field only ever grows; badges keep the order they were earned in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub reports_submitted: u32,
    pub points: u32,
    pub badges: Vec<Badge>,
}
