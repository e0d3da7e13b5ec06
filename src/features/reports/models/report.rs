use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::DEFAULT_SEVERITY;

/// Incident category.
///
/// Unknown labels are kept verbatim in `Other` so clients that send
/// free-form categories keep working; they simply get the default severity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncidentCategory {
    Accident,
    WrongWayDriving,
    IllegalStop,
    IllegalToll,
    Roadblock,
    Pothole,
    Other(String),
}

impl IncidentCategory {
    /// Every category with a severity entry, in display order
    pub const KNOWN: [IncidentCategory; 6] = [
        IncidentCategory::Accident,
        IncidentCategory::WrongWayDriving,
        IncidentCategory::IllegalToll,
        IncidentCategory::Roadblock,
        IncidentCategory::IllegalStop,
        IncidentCategory::Pothole,
    ];

    pub fn label(&self) -> &str {
        match self {
            IncidentCategory::Accident => "Accident",
            IncidentCategory::WrongWayDriving => "Wrong-Way Driving",
            IncidentCategory::IllegalStop => "Illegal Stop",
            IncidentCategory::IllegalToll => "Illegal Toll",
            IncidentCategory::Roadblock => "Roadblock",
            IncidentCategory::Pothole => "Pothole",
            IncidentCategory::Other(label) => label,
        }
    }

    /// Static severity table (1 = minor, 5 = critical)
    pub fn severity(&self) -> u8 {
        match self {
            IncidentCategory::Accident => 5,
            IncidentCategory::Roadblock | IncidentCategory::IllegalToll => 4,
            IncidentCategory::WrongWayDriving => 3,
            IncidentCategory::IllegalStop | IncidentCategory::Pothole => 2,
            IncidentCategory::Other(_) => DEFAULT_SEVERITY,
        }
    }
}

impl From<String> for IncidentCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Accident" => IncidentCategory::Accident,
            "Wrong-Way Driving" => IncidentCategory::WrongWayDriving,
            "Illegal Stop" => IncidentCategory::IllegalStop,
            "Illegal Toll" => IncidentCategory::IllegalToll,
            "Roadblock" => IncidentCategory::Roadblock,
            "Pothole" => IncidentCategory::Pothole,
            _ => IncidentCategory::Other(value),
        }
    }
}

impl From<&str> for IncidentCategory {
    fn from(value: &str) -> Self {
        IncidentCategory::from(value.to_string())
    }
}

impl From<IncidentCategory> for String {
    fn from(category: IncidentCategory) -> Self {
        match category {
            IncidentCategory::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Report status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ReportStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Assigned to Police")]
    AssignedToPolice,
    #[serde(rename = "Assigned to DSCC")]
    AssignedToDscc,
    #[serde(rename = "Resolved")]
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 5] = [
        ReportStatus::Pending,
        ReportStatus::UnderReview,
        ReportStatus::AssignedToPolice,
        ReportStatus::AssignedToDscc,
        ReportStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::AssignedToPolice => "Assigned to Police",
            ReportStatus::AssignedToDscc => "Assigned to DSCC",
            ReportStatus::Resolved => "Resolved",
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(
            self,
            ReportStatus::AssignedToPolice | ReportStatus::AssignedToDscc
        )
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position of an incident
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// In-memory model for a report
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: u64,
    pub category: IncidentCategory,
    pub location: Location,
    pub description: String,
    pub severity: u8,
    pub verified: bool,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    pub reporter_id: String,
}

/// Data for creating a new report
#[derive(Debug, Clone)]
pub struct NewReport {
    pub category: IncidentCategory,
    pub location: Location,
    pub description: String,
}

/// Server-side ordering for report listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportSort {
    /// Highest severity first, stored order among equals
    Severity,
    /// Newest first
    Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_severities() {
        let expected = [
            ("Accident", 5),
            ("Wrong-Way Driving", 3),
            ("Illegal Stop", 2),
            ("Illegal Toll", 4),
            ("Roadblock", 4),
            ("Pothole", 2),
        ];

        for (label, severity) in expected {
            let category = IncidentCategory::from(label);
            assert!(!matches!(category, IncidentCategory::Other(_)), "{label}");
            assert_eq!(category.severity(), severity, "{label}");
            assert_eq!(category.label(), label);
        }
    }

    #[test]
    fn test_unknown_category_defaults_to_severity_one() {
        for label in ["", "pothole", "Flood", "ACCIDENT"] {
            let category = IncidentCategory::from(label);
            assert_eq!(category, IncidentCategory::Other(label.to_string()));
            assert_eq!(category.severity(), DEFAULT_SEVERITY);
        }
    }

    #[test]
    fn test_category_serde_uses_labels() {
        let json = serde_json::to_string(&IncidentCategory::WrongWayDriving).unwrap();
        assert_eq!(json, "\"Wrong-Way Driving\"");

        let other: IncidentCategory = serde_json::from_str("\"Flood\"").unwrap();
        assert_eq!(other, IncidentCategory::Other("Flood".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"Flood\"");
    }

    #[test]
    fn test_status_wire_labels() {
        for status in ReportStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: ReportStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }

        assert!(serde_json::from_str::<ReportStatus>("\"Closed\"").is_err());
    }
}
