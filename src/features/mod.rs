pub mod dashboard;
pub mod gamification;
pub mod reports;
pub mod risk_zones;
