//! Static risk zones for the map overlay.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RiskZoneService;
