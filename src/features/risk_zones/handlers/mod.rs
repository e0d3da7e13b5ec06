pub mod risk_zone_handler;

pub use risk_zone_handler::*;
