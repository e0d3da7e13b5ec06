use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Area with an elevated incident risk, shown as a map overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskZone {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    /// 0 to 100
    pub risk_level: u8,
    #[serde(rename = "type")]
    pub zone_type: String,
}
