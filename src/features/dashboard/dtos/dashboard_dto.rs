use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use utoipa::ToSchema;

/// Counts keyed by label, serialized as a JSON object in insertion order.
///
/// Chart clients colour series by position, so the order is part of the
/// wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounts(Vec<(String, u64)>);

impl LabelCounts {
    /// Start with every label at zero, in the given order
    pub fn with_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self(labels.into_iter().map(|l| (l.to_string(), 0)).collect())
    }

    /// Add one to `label`, appending it when unseen
    pub fn increment(&mut self, label: &str) {
        match self.0.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.0.push((label.to_string(), 1)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, c)| c).sum()
    }
}

impl Index<&str> for LabelCounts {
    type Output = u64;

    fn index(&self, label: &str) -> &u64 {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c)
            .unwrap_or(&0)
    }
}

impl Serialize for LabelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Aggregate statistics over every report
#[derive(Debug, Clone, PartialEq, serde::Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_reports: u64,
    pub pending_reports: u64,
    pub resolved_reports: u64,
    pub verified_reports: u64,
    /// Report count per category label. Always lists the six known
    /// categories first; other labels follow in order of appearance.
    #[schema(value_type = Object)]
    pub category_stats: LabelCounts,
    /// Report count per status label, every status included, lifecycle order
    #[schema(value_type = Object)]
    pub status_stats: LabelCounts,
}
