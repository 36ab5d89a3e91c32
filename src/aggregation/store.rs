use super::engine::{aggregate, Thresholds};
use crate::core::{AggregatedGroup, ElementRecord};

/// Accumulates records for one run and answers the grouping query.
///
/// Implementations only need append and a group/count/collect reduction; the
/// reduction semantics are those of [`aggregate`].
pub trait RecordStore {
    fn accumulate(&mut self, batch: Vec<ElementRecord>);

    fn record_count(&self) -> usize;

    fn aggregate(&self, thresholds: &Thresholds) -> Vec<AggregatedGroup>;
}

/// Append-only in-process store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<ElementRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn accumulate(&mut self, mut batch: Vec<ElementRecord>) {
        self.records.append(&mut batch);
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn aggregate(&self, thresholds: &Thresholds) -> Vec<AggregatedGroup> {
        aggregate(&self.records, thresholds)
    }
}
