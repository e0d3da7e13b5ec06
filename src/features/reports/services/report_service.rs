use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;

use crate::features::reports::lifecycle::{LifecycleError, TransitionPolicy};
use crate::features::reports::models::{
    IncidentCategory, NewReport, Report, ReportSort, ReportStatus,
};
use crate::features::reports::services::Verifier;
use crate::shared::constants::{REPORTER_ID_PREFIX, REPORTER_ID_SUFFIX_LEN};

/// The collection and the id counter advance together under one lock.
struct ReportStore {
    /// Most recently created first
    reports: Vec<Report>,
    next_id: u64,
}

/// Service owning the in-memory report collection
pub struct ReportService {
    store: RwLock<ReportStore>,
    verifier: Arc<dyn Verifier>,
    policy: TransitionPolicy,
}

impl ReportService {
    pub fn new(verifier: Arc<dyn Verifier>, policy: TransitionPolicy) -> Self {
        Self::with_reports(Vec::new(), verifier, policy)
    }

    /// Start from existing reports, kept in the given order.
    /// New ids continue after the highest existing one.
    pub fn with_reports(
        reports: Vec<Report>,
        verifier: Arc<dyn Verifier>,
        policy: TransitionPolicy,
    ) -> Self {
        let next_id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            store: RwLock::new(ReportStore { reports, next_id }),
            verifier,
            policy,
        }
    }

    /// Create a report and place it at the head of the collection
    pub async fn create(&self, data: NewReport) -> Report {
        let severity = data.category.severity();
        let verified = self.verifier.verify(&data);
        let reporter_id = generate_reporter_id();

        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let report = Report {
            id,
            category: data.category,
            location: data.location,
            description: data.description,
            severity,
            verified,
            status: ReportStatus::Pending,
            timestamp: Utc::now(),
            reporter_id,
        };
        store.reports.insert(0, report.clone());
        drop(store);

        tracing::info!(
            "Report created: id={}, category={}, severity={}, verified={}",
            report.id,
            report.category,
            report.severity,
            report.verified
        );

        report
    }

    /// All reports, most recently created first
    pub async fn list(&self) -> Vec<Report> {
        self.store.read().await.reports.clone()
    }

    /// Reports narrowed to one category and optionally re-ordered
    pub async fn list_filtered(
        &self,
        category: Option<&IncidentCategory>,
        sort: Option<ReportSort>,
    ) -> Vec<Report> {
        let mut reports: Vec<Report> = {
            let store = self.store.read().await;
            store
                .reports
                .iter()
                .filter(|r| match category {
                    Some(c) => &r.category == c,
                    None => true,
                })
                .cloned()
                .collect()
        };

        match sort {
            // Stable: equal severities keep stored order
            Some(ReportSort::Severity) => reports.sort_by(|a, b| b.severity.cmp(&a.severity)),
            Some(ReportSort::Timestamp) => reports.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            None => {}
        }

        reports
    }

    pub async fn get(&self, id: u64) -> Result<Report, LifecycleError> {
        self.store
            .read()
            .await
            .reports
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(LifecycleError::NotFound(id))
    }

    /// Move a report to a new status. Nothing else about the report changes.
    pub async fn update_status(
        &self,
        id: u64,
        status: ReportStatus,
    ) -> Result<Report, LifecycleError> {
        let mut store = self.store.write().await;
        let report = store
            .reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LifecycleError::NotFound(id))?;

        if let Err(e) = self.policy.check(report, status) {
            tracing::warn!("Rejected status change: {}", e);
            return Err(e);
        }

        let previous = report.status;
        report.status = status;
        let updated = report.clone();
        drop(store);

        tracing::info!(
            "Report status updated: id={}, from={}, to={}",
            id,
            previous,
            status
        );

        Ok(updated)
    }
}

fn generate_reporter_id() -> String {
    const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REPORTER_ID_SUFFIX_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("{}{}", REPORTER_ID_PREFIX, suffix)
}
