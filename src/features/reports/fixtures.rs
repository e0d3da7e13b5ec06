//! Demo reports loaded at startup.

use chrono::{DateTime, Duration, Utc};

use crate::features::reports::models::{IncidentCategory, Location, Report, ReportStatus};

struct Seed {
    id: u64,
    category: IncidentCategory,
    lat: f64,
    lng: f64,
    address: &'static str,
    description: &'static str,
    verified: bool,
    status: ReportStatus,
    hours_ago: i64,
}

/// Six Dhaka incidents, timestamped relative to `now`, in stored order
pub fn seed_reports(now: DateTime<Utc>) -> Vec<Report> {
    let seeds = [
        Seed {
            id: 1,
            category: IncidentCategory::Accident,
            lat: 23.7925,
            lng: 90.4078,
            address: "Gulshan Circle 1",
            description: "Multi-vehicle collision blocking traffic",
            verified: true,
            status: ReportStatus::AssignedToPolice,
            hours_ago: 2,
        },
        Seed {
            id: 2,
            category: IncidentCategory::WrongWayDriving,
            lat: 23.7776,
            lng: 90.4066,
            address: "Mohakhali Flyover",
            description: "Motorcycle going against traffic on flyover",
            verified: true,
            status: ReportStatus::Pending,
            hours_ago: 5,
        },
        Seed {
            id: 3,
            category: IncidentCategory::IllegalToll,
            lat: 23.8103,
            lng: 90.4125,
            address: "Banani Main Road",
            description: "Unauthorized toll collection by local goons",
            verified: false,
            status: ReportStatus::UnderReview,
            hours_ago: 8,
        },
        Seed {
            id: 4,
            category: IncidentCategory::Roadblock,
            lat: 23.7461,
            lng: 90.3742,
            address: "Dhanmondi 27",
            description: "Construction debris blocking lane",
            verified: true,
            status: ReportStatus::Resolved,
            hours_ago: 12,
        },
        Seed {
            id: 5,
            category: IncidentCategory::Pothole,
            lat: 23.7279,
            lng: 90.4053,
            address: "Elephant Road",
            description: "Large pothole causing vehicle damage",
            verified: true,
            status: ReportStatus::AssignedToDscc,
            hours_ago: 24,
        },
        Seed {
            id: 6,
            category: IncidentCategory::IllegalStop,
            lat: 23.7644,
            lng: 90.3756,
            address: "New Market Area",
            description: "Bus stopping in no-parking zone",
            verified: false,
            status: ReportStatus::Pending,
            hours_ago: 18,
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Report {
            id: seed.id,
            severity: seed.category.severity(),
            category: seed.category,
            location: Location {
                lat: seed.lat,
                lng: seed.lng,
                address: seed.address.to_string(),
            },
            description: seed.description.to_string(),
            verified: seed.verified,
            status: seed.status,
            timestamp: now - Duration::hours(seed.hours_ago),
            reporter_id: format!("citizen_{:03}", seed.id),
        })
        .collect()
}
