mod risk_zone;

pub use risk_zone::RiskZone;
