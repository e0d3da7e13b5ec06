use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::gamification::dtos::SubmissionAwardDto;
use crate::features::reports::models::{
    IncidentCategory, Location, NewReport, Report, ReportSort, ReportStatus,
};

/// Location of an incident
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LocationDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lng: f64,

    #[serde(default)]
    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    pub address: String,
}

impl From<Location> for LocationDto {
    fn from(l: Location) -> Self {
        Self {
            lat: l.lat,
            lng: l.lng,
            address: l.address,
        }
    }
}

impl From<LocationDto> for Location {
    fn from(l: LocationDto) -> Self {
        Self {
            lat: l.lat,
            lng: l.lng,
            address: l.address,
        }
    }
}

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: u64,
    #[schema(value_type = String, example = "Pothole")]
    pub category: IncidentCategory,
    pub location: LocationDto,
    pub description: String,
    /// 1 (minor) to 5 (critical)
    pub severity: u8,
    pub verified: bool,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    pub reporter_id: String,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            category: r.category,
            location: r.location.into(),
            description: r.description,
            severity: r.severity,
            verified: r.verified,
            status: r.status,
            timestamp: r.timestamp,
            reporter_id: r.reporter_id,
        }
    }
}

/// Request DTO for submitting a report.
///
/// The category is not checked against the known list; unknown labels are
/// stored as-is with the default severity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[serde(default)]
    #[schema(example = "Pothole")]
    pub category: String,

    #[validate(nested)]
    pub location: LocationDto,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: String,

    /// Reporter profile to credit with submission points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "rahim")]
    pub profile: Option<String>,
}

impl From<CreateReportDto> for NewReport {
    fn from(dto: CreateReportDto) -> Self {
        Self {
            category: IncidentCategory::from(dto.category),
            location: dto.location.into(),
            description: dto.description,
        }
    }
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Result of a create or status update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportMutationResponseDto {
    pub success: bool,
    pub report: ReportResponseDto,
    /// Points credited when the report named a profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub award: Option<SubmissionAwardDto>,
}

impl From<Report> for ReportMutationResponseDto {
    fn from(report: Report) -> Self {
        Self {
            success: true,
            report: report.into(),
            award: None,
        }
    }
}

/// Optional filtering and ordering for report listings
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListReportsQuery {
    /// Only reports with exactly this category label
    pub category: Option<String>,

    /// `severity` or `timestamp`; stored order when absent
    pub sort: Option<ReportSort>,
}
