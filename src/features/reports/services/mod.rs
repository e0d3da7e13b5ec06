mod report_service;
mod verification;

pub use report_service::ReportService;
pub use verification::{RandomVerifier, Verifier};
