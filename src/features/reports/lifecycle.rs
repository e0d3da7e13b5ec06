//! Incident lifecycle rules.
//!
//! ```text
//! Pending ──► Under Review ──► Assigned to {Police | DSCC} ──► Resolved
//!    │                                                           ▲
//!    └───────────────────────────────────────────────────────────┘
//! ```
//!
//! `Resolved` is terminal. The agency a report is assigned to follows from
//! its category: potholes go to the city corporation (DSCC), everything
//! else to the police.

use thiserror::Error;

use crate::core::error::AppError;
use crate::features::reports::models::{IncidentCategory, Report, ReportStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Report {0} not found")]
    NotFound(u64),

    #[error("Report {id} cannot move from '{from}' to '{to}'")]
    IllegalTransition {
        id: u64,
        from: ReportStatus,
        to: ReportStatus,
    },
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::NotFound(_) => AppError::NotFound(err.to_string()),
            LifecycleError::IllegalTransition { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

/// How strictly status updates are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Only moves along the lifecycle graph are accepted
    Enforced,
    /// Any status may be written
    Permissive,
}

impl TransitionPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            TransitionPolicy::Enforced
        } else {
            TransitionPolicy::Permissive
        }
    }

    pub fn check(&self, report: &Report, to: ReportStatus) -> Result<(), LifecycleError> {
        match self {
            TransitionPolicy::Permissive => Ok(()),
            TransitionPolicy::Enforced if is_legal_transition(&report.category, report.status, to) => {
                Ok(())
            }
            TransitionPolicy::Enforced => Err(LifecycleError::IllegalTransition {
                id: report.id,
                from: report.status,
                to,
            }),
        }
    }
}

/// Agency assignment for a category
pub fn assignment_target(category: &IncidentCategory) -> ReportStatus {
    match category {
        IncidentCategory::Pothole => ReportStatus::AssignedToDscc,
        _ => ReportStatus::AssignedToPolice,
    }
}

/// Writing the current status again is a no-op and always legal.
pub fn is_legal_transition(
    category: &IncidentCategory,
    from: ReportStatus,
    to: ReportStatus,
) -> bool {
    if from == to {
        return true;
    }

    match (from, to) {
        (ReportStatus::Pending, ReportStatus::UnderReview)
        | (ReportStatus::Pending, ReportStatus::Resolved) => true,
        (ReportStatus::UnderReview, target) if target.is_assigned() => {
            target == assignment_target(category)
        }
        (assigned, ReportStatus::Resolved) => assigned.is_assigned(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_report;

    #[test]
    fn test_assignment_target_routes_potholes_to_dscc() {
        assert_eq!(
            assignment_target(&IncidentCategory::Pothole),
            ReportStatus::AssignedToDscc
        );
        for category in IncidentCategory::KNOWN {
            if category != IncidentCategory::Pothole {
                assert_eq!(assignment_target(&category), ReportStatus::AssignedToPolice);
            }
        }
        assert_eq!(
            assignment_target(&IncidentCategory::from("Flood")),
            ReportStatus::AssignedToPolice
        );
    }

    #[test]
    fn test_happy_paths() {
        let pothole = IncidentCategory::Pothole;
        assert!(is_legal_transition(&pothole, ReportStatus::Pending, ReportStatus::UnderReview));
        assert!(is_legal_transition(
            &pothole,
            ReportStatus::UnderReview,
            ReportStatus::AssignedToDscc
        ));
        assert!(is_legal_transition(&pothole, ReportStatus::AssignedToDscc, ReportStatus::Resolved));

        let accident = IncidentCategory::Accident;
        assert!(is_legal_transition(
            &accident,
            ReportStatus::UnderReview,
            ReportStatus::AssignedToPolice
        ));
        assert!(is_legal_transition(
            &accident,
            ReportStatus::AssignedToPolice,
            ReportStatus::Resolved
        ));
        assert!(is_legal_transition(&accident, ReportStatus::Pending, ReportStatus::Resolved));
    }

    #[test]
    fn test_resolved_is_terminal() {
        let category = IncidentCategory::Roadblock;
        for to in ReportStatus::ALL {
            let legal = is_legal_transition(&category, ReportStatus::Resolved, to);
            assert_eq!(legal, to == ReportStatus::Resolved, "Resolved -> {to}");
        }
    }

    #[test]
    fn test_assignment_requires_review_and_matching_agency() {
        let pothole = IncidentCategory::Pothole;
        assert!(!is_legal_transition(
            &pothole,
            ReportStatus::Pending,
            ReportStatus::AssignedToDscc
        ));
        assert!(!is_legal_transition(
            &pothole,
            ReportStatus::UnderReview,
            ReportStatus::AssignedToPolice
        ));
        assert!(!is_legal_transition(
            &IncidentCategory::IllegalStop,
            ReportStatus::UnderReview,
            ReportStatus::AssignedToDscc
        ));
    }

    #[test]
    fn test_no_backwards_moves() {
        let category = IncidentCategory::Accident;
        assert!(!is_legal_transition(&category, ReportStatus::UnderReview, ReportStatus::Pending));
        assert!(!is_legal_transition(
            &category,
            ReportStatus::AssignedToPolice,
            ReportStatus::UnderReview
        ));
        assert!(!is_legal_transition(
            &category,
            ReportStatus::AssignedToPolice,
            ReportStatus::AssignedToDscc
        ));
    }

    #[test]
    fn test_policy_check() {
        let mut report = sample_report(3, IncidentCategory::Accident);
        report.status = ReportStatus::Resolved;

        assert_eq!(
            TransitionPolicy::Enforced.check(&report, ReportStatus::Pending),
            Err(LifecycleError::IllegalTransition {
                id: 3,
                from: ReportStatus::Resolved,
                to: ReportStatus::Pending,
            })
        );
        assert_eq!(
            TransitionPolicy::Permissive.check(&report, ReportStatus::Pending),
            Ok(())
        );
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            AppError::from(LifecycleError::NotFound(42)),
            AppError::NotFound(msg) if msg == "Report 42 not found"
        ));
        assert!(matches!(
            AppError::from(LifecycleError::IllegalTransition {
                id: 1,
                from: ReportStatus::Resolved,
                to: ReportStatus::Pending,
            }),
            AppError::Conflict(_)
        ));
    }
}
