use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::{AggregatedGroup, ElementRecord};

pub const DEFAULT_MIN_CLASSES: usize = 1;
pub const DEFAULT_MIN_OCCURRENCES: usize = 2;

/// Inclusion gates applied during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Minimum distinct class tokens a record needs to be counted at all
    pub min_classes: usize,
    /// Minimum occurrences a group needs to be reported
    pub min_occurrences: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_classes: DEFAULT_MIN_CLASSES,
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
        }
    }
}

impl Thresholds {
    pub fn new(min_classes: usize, min_occurrences: usize) -> Self {
        Self {
            min_classes,
            min_occurrences,
        }
    }

    pub fn admits_record(&self, record: &ElementRecord) -> bool {
        record.class_count >= self.min_classes
    }

    pub fn admits_group(&self, occurrence_count: usize) -> bool {
        occurrence_count >= self.min_occurrences
    }
}

#[derive(Default)]
struct GroupTally<'a> {
    class_count: usize,
    occurrences: usize,
    locations: BTreeSet<&'a str>,
}

/// Group records by `(tag, class_set)`, count them and collect their locations.
///
/// Records below `min_classes` are dropped before grouping; groups below
/// `min_occurrences` are dropped after. The result is ordered by occurrence
/// count descending, ties broken by tag then class set ascending.
pub fn aggregate<'a, I>(records: I, thresholds: &Thresholds) -> Vec<AggregatedGroup>
where
    I: IntoIterator<Item = &'a ElementRecord>,
{
    let mut tallies: BTreeMap<(&'a str, &'a str), GroupTally<'a>> = BTreeMap::new();

    for record in records.into_iter().filter(|r| thresholds.admits_record(r)) {
        let tally = tallies
            .entry((record.tag.as_str(), record.class_set.as_str()))
            .or_default();
        tally.class_count = record.class_count;
        tally.occurrences += 1;
        tally.locations.insert(record.source_location.as_str());
    }

    let mut groups: Vec<AggregatedGroup> = tallies
        .into_iter()
        .filter(|(_, tally)| thresholds.admits_group(tally.occurrences))
        .map(|((tag, class_set), tally)| AggregatedGroup {
            tag: tag.to_string(),
            class_set: class_set.to_string(),
            class_count: tally.class_count,
            occurrence_count: tally.occurrences,
            locations: tally.locations.into_iter().map(str::to_string).collect(),
        })
        .collect();

    groups.sort_by(AggregatedGroup::report_order);
    groups
}
