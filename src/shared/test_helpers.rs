use std::sync::Arc;

use chrono::Utc;

use crate::features::gamification::stores::InMemoryStatsStore;
use crate::features::gamification::GamificationService;
use crate::features::reports::fixtures::seed_reports;
use crate::features::reports::models::{
    IncidentCategory, Location, NewReport, Report, ReportStatus,
};
use crate::features::reports::services::{ReportService, Verifier};
use crate::features::reports::TransitionPolicy;

/// Verifier with a predetermined answer
pub struct FixedVerifier(pub bool);

impl Verifier for FixedVerifier {
    fn verify(&self, _report: &NewReport) -> bool {
        self.0
    }
}

pub fn sample_new_report(category: &str) -> NewReport {
    NewReport {
        category: IncidentCategory::from(category),
        location: Location {
            lat: 23.7509,
            lng: 90.3935,
            address: "Farmgate".to_string(),
        },
        description: "Test incident".to_string(),
    }
}

pub fn sample_report(id: u64, category: IncidentCategory) -> Report {
    Report {
        id,
        severity: category.severity(),
        category,
        location: Location {
            lat: 23.7509,
            lng: 90.3935,
            address: "Farmgate".to_string(),
        },
        description: "Test incident".to_string(),
        verified: true,
        status: ReportStatus::Pending,
        timestamp: Utc::now(),
        reporter_id: "citizen_test00001".to_string(),
    }
}

/// Report service loaded with the demo fixtures; every new report is verified
pub fn seeded_report_service(policy: TransitionPolicy) -> Arc<ReportService> {
    Arc::new(ReportService::with_reports(
        seed_reports(Utc::now()),
        Arc::new(FixedVerifier(true)),
        policy,
    ))
}

/// Gamification service over an in-memory store, 10 points per submission
pub fn in_memory_gamification_service() -> Arc<GamificationService> {
    Arc::new(GamificationService::new(
        Arc::new(InMemoryStatsStore::new()),
        10,
    ))
}
