use crate::features::risk_zones::models::RiskZone;

/// Serves the static list of known risk zones
pub struct RiskZoneService {
    zones: Vec<RiskZone>,
}

impl RiskZoneService {
    pub fn new(zones: Vec<RiskZone>) -> Self {
        Self { zones }
    }

    /// Hotspots identified for central Dhaka
    pub fn with_defaults() -> Self {
        let zone = |lat: f64, lng: f64, name: &str, risk_level: u8, zone_type: &str| RiskZone {
            lat,
            lng,
            name: name.to_string(),
            risk_level,
            zone_type: zone_type.to_string(),
        };

        Self::new(vec![
            zone(23.7925, 90.4078, "Gulshan Circle 1", 85, "High Traffic"),
            zone(23.7776, 90.4066, "Mohakhali Flyover", 90, "Accident Prone"),
            zone(23.8103, 90.4125, "Banani", 75, "Congestion"),
        ])
    }

    pub fn list(&self) -> &[RiskZone] {
        &self.zones
    }
}
