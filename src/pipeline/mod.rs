//! Run orchestration.
//!
//! A [`RunContext`] owns the record store for exactly one run. Documents are
//! extracted independently (optionally in parallel, see [`corpus`]) and their
//! record batches are fed through [`RunContext::ingest`], the single
//! accumulation point. [`RunContext::finish`] consumes the context, so nothing
//! accumulated by one run can leak into the next.

pub mod corpus;

pub use corpus::{scan_corpus, CorpusOptions};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::aggregation::{MemoryStore, RecordStore, Thresholds};
use crate::core::{AggregatedGroup, ElementRecord};
use crate::extraction::{Extractor, MarkupScanner};

/// What to do when a document cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    /// Fail the whole run without writing a report
    #[default]
    Abort,
    /// Log a warning, count the document as skipped and continue
    Skip,
}

/// How a document path is turned into a source-location token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStyle {
    #[default]
    Full,
    Basename,
}

impl LocationStyle {
    pub fn from_short_flag(short: bool) -> Self {
        if short {
            Self::Basename
        } else {
            Self::Full
        }
    }

    pub fn render(&self, path: &Path) -> String {
        match self {
            Self::Full => path.display().to_string(),
            Self::Basename => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// A document's text paired with its opaque source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub location: String,
}

impl Document {
    pub fn new(text: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: location.into(),
        }
    }
}

/// Counters describing one finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub documents_scanned: usize,
    pub documents_skipped: usize,
    pub records: usize,
    pub groups: usize,
}

pub struct RunContext<S: RecordStore = MemoryStore> {
    store: S,
    summary: RunSummary,
}

impl RunContext<MemoryStore> {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl Default for RunContext<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordStore> RunContext<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            summary: RunSummary::default(),
        }
    }

    /// Accumulate one document's records.
    pub fn ingest(&mut self, batch: Vec<ElementRecord>) {
        self.summary.documents_scanned += 1;
        self.store.accumulate(batch);
    }

    pub fn record_skipped(&mut self) {
        self.summary.documents_skipped += 1;
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            records: self.store.record_count(),
            ..self.summary
        }
    }

    /// Run the aggregation query and tear the context down.
    pub fn finish(self, thresholds: &Thresholds) -> (Vec<AggregatedGroup>, RunSummary) {
        let groups = self.store.aggregate(thresholds);
        let summary = RunSummary {
            groups: groups.len(),
            ..self.summary()
        };
        (groups, summary)
    }
}

/// Extract and aggregate an in-memory corpus.
pub fn analyze_documents<'a, I, M>(
    documents: I,
    extractor: &Extractor<M>,
    thresholds: &Thresholds,
) -> Vec<AggregatedGroup>
where
    I: IntoIterator<Item = &'a Document>,
    M: MarkupScanner,
{
    let mut context = RunContext::new();
    for document in documents {
        context.ingest(extractor.extract(&document.text, &document.location));
    }
    context.finish(thresholds).0
}
