use crate::core::AggregatedGroup;
use serde::Serialize;

/// Column headers, in output order.
pub const REPORT_HEADER: [&str; 4] = ["name", "num_instances", "classes", "file_paths"];

pub const LOCATION_SEPARATOR: &str = ",";

/// One report line. Field names match [`REPORT_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub num_instances: usize,
    pub classes: String,
    pub file_paths: String,
}

impl ReportRow {
    pub fn fields(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.num_instances.to_string(),
            self.classes.clone(),
            self.file_paths.clone(),
        ]
    }
}

impl From<&AggregatedGroup> for ReportRow {
    fn from(group: &AggregatedGroup) -> Self {
        Self {
            name: group.tag.clone(),
            num_instances: group.occurrence_count,
            classes: group.class_set.clone(),
            // the location set is ordered, so the join is stable
            file_paths: group
                .locations
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(LOCATION_SEPARATOR),
        }
    }
}

/// Project ordered groups onto report rows, preserving their order.
pub fn build_rows(groups: &[AggregatedGroup]) -> Vec<ReportRow> {
    groups.iter().map(ReportRow::from).collect()
}
