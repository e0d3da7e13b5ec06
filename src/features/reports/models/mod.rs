mod report;

pub use report::{IncidentCategory, Location, NewReport, Report, ReportSort, ReportStatus};
