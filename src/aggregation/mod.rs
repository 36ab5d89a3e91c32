//! Grouping, counting and threshold filtering of element records.

pub mod engine;
pub mod store;

pub use engine::{aggregate, Thresholds, DEFAULT_MIN_CLASSES, DEFAULT_MIN_OCCURRENCES};
pub use store::{MemoryStore, RecordStore};
