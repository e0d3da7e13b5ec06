use std::sync::Arc;

use crate::features::dashboard::dtos::{DashboardStatsDto, LabelCounts};
use crate::features::reports::models::{IncidentCategory, Report, ReportStatus};
use crate::features::reports::ReportService;

/// Label used in category counts for reports submitted without a category
const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Service for public dashboard queries
pub struct DashboardService {
    report_service: Arc<ReportService>,
}

impl DashboardService {
    pub fn new(report_service: Arc<ReportService>) -> Self {
        Self { report_service }
    }

    /// Recomputed from the full collection on every call; nothing is cached.
    pub async fn get_stats(&self) -> DashboardStatsDto {
        let reports = self.report_service.list().await;
        let stats = aggregate(&reports);

        tracing::debug!(
            "Dashboard stats computed: total={}, pending={}, resolved={}",
            stats.total_reports,
            stats.pending_reports,
            stats.resolved_reports
        );

        stats
    }
}

pub fn aggregate(reports: &[Report]) -> DashboardStatsDto {
    let mut category_stats =
        LabelCounts::with_labels(IncidentCategory::KNOWN.iter().map(|c| c.label()));
    let mut status_stats = LabelCounts::with_labels(ReportStatus::ALL.iter().map(|s| s.as_str()));
    let mut verified_reports = 0;

    for report in reports {
        let label = match report.category.label() {
            "" => UNCATEGORIZED_LABEL,
            label => label,
        };
        category_stats.increment(label);
        status_stats.increment(report.status.as_str());
        if report.verified {
            verified_reports += 1;
        }
    }

    DashboardStatsDto {
        total_reports: reports.len() as u64,
        pending_reports: status_stats[ReportStatus::Pending.as_str()],
        resolved_reports: status_stats[ReportStatus::Resolved.as_str()],
        verified_reports,
        category_stats,
        status_stats,
    }
}
