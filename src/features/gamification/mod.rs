//! Points and badges earned by submitting reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/profiles/{name}/stats` | Current points, badges and next badge |
//! | POST | `/api/profiles/{name}/submissions` | Award one report submission |

pub mod dtos;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::GamificationService;
