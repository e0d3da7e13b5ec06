mod risk_zone_service;

pub use risk_zone_service::RiskZoneService;
