use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::extraction::ClassSet;

/// One qualifying element instance found in a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElementRecord {
    pub tag: String,
    /// Canonical class-set string (distinct tokens, sorted, single-space joined)
    pub class_set: String,
    /// Number of distinct class tokens, captured at extraction time
    pub class_count: usize,
    /// Opaque identifier of the originating document
    pub source_location: String,
}

impl ElementRecord {
    pub fn new(tag: impl Into<String>, classes: ClassSet, source_location: impl Into<String>) -> Self {
        let class_count = classes.count();
        Self {
            tag: tag.into(),
            class_set: classes.into_canonical(),
            class_count,
            source_location: source_location.into(),
        }
    }

    pub fn key(&self) -> GroupKey {
        GroupKey {
            tag: self.tag.clone(),
            class_set: self.class_set.clone(),
        }
    }
}

/// Composite identity of a group. Ordered by tag, then class set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    pub tag: String,
    pub class_set: String,
}

/// A (tag, class set) combination and everywhere it was seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AggregatedGroup {
    pub tag: String,
    pub class_set: String,
    pub class_count: usize,
    /// Total records sharing the key, counting repeats within one document
    pub occurrence_count: usize,
    /// Distinct source locations, in ascending order
    pub locations: BTreeSet<String>,
}

impl AggregatedGroup {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            tag: self.tag.clone(),
            class_set: self.class_set.clone(),
        }
    }

    /// Report ordering: occurrence count descending, then tag and class set ascending.
    pub fn report_order(&self, other: &Self) -> Ordering {
        other
            .occurrence_count
            .cmp(&self.occurrence_count)
            .then_with(|| self.tag.cmp(&other.tag))
            .then_with(|| self.class_set.cmp(&other.class_set))
    }
}
