//! Find recurring element/class-set combinations across HTML templates.
//!
//! Documents are scanned for qualifying elements ([`extraction`]), each
//! element's `class` attribute is reduced to a canonical class set, and the
//! resulting records are grouped and counted per run ([`pipeline`],
//! [`aggregation`]). Groups that pass the thresholds are written out as a
//! report ([`output`]).
//!
//! ```
//! use classmap::{analyze_documents, Document, Extractor, Thresholds};
//!
//! let docs = [
//!     Document::new(r#"<div class="card p-4"></div>"#, "a.html"),
//!     Document::new(r#"<div class="p-4  card"></div>"#, "b.html"),
//! ];
//! let groups = analyze_documents(&docs, &Extractor::default(), &Thresholds::default());
//! assert_eq!(groups[0].class_set, "card p-4");
//! assert_eq!(groups[0].occurrence_count, 2);
//! ```

pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod progress;

// Re-export commonly used types
pub use crate::aggregation::{aggregate, MemoryStore, RecordStore, Thresholds};
pub use crate::config::{AnalyzeConfig, ClassmapConfig};
pub use crate::core::{AggregatedGroup, ElementRecord, GroupKey};
pub use crate::errors::{Error, Result};
pub use crate::extraction::{ClassSet, ElementKinds, Extractor, HtmlScanner, MarkupScanner};
pub use crate::output::{render_report, OutputFormat};
pub use crate::pipeline::{
    analyze_documents, scan_corpus, CorpusOptions, Document, LocationStyle, ReadErrorPolicy,
    RunContext, RunSummary,
};
