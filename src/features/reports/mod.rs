//! Incident reports: submission, listing and the status lifecycle.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reports` | List reports, newest first |
//! | POST | `/api/reports` | Submit a report |
//! | GET | `/api/reports/{id}` | Get one report |
//! | PUT | `/api/reports/{id}` | Change report status |

pub mod dtos;
pub mod fixtures;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod routes;
pub mod services;

pub use lifecycle::TransitionPolicy;
pub use services::{RandomVerifier, ReportService};
