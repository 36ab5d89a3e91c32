//! Per-document element extraction.
//!
//! The `Extractor` converts one document's text into [`ElementRecord`]s. It is a
//! pure function of `(text, location)`: it performs no I/O and never fails, so a
//! malformed document only ever yields fewer records.
//!
//! # Usage
//!
//! ```rust
//! use classmap::extraction::Extractor;
//!
//! let extractor = Extractor::default();
//! let records = extractor.extract(r#"<div class="b a"><div></div></div>"#, "index.html");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].class_set, "a b");
//! ```

use super::class_set::ClassSet;
use super::scanner::{ElementKinds, HtmlScanner, MarkupScanner};
use crate::core::ElementRecord;
use tracing::trace;

/// Extracts qualifying element records from markup text.
#[derive(Clone, Debug)]
pub struct Extractor<S = HtmlScanner> {
    scanner: S,
    kinds: ElementKinds,
}

impl Extractor<HtmlScanner> {
    pub fn new(kinds: ElementKinds) -> Self {
        Self {
            scanner: HtmlScanner,
            kinds,
        }
    }
}

impl Default for Extractor<HtmlScanner> {
    fn default() -> Self {
        Self::new(ElementKinds::default())
    }
}

impl<S: MarkupScanner> Extractor<S> {
    pub fn with_scanner(scanner: S, kinds: ElementKinds) -> Self {
        Self { scanner, kinds }
    }

    pub fn kinds(&self) -> &ElementKinds {
        &self.kinds
    }

    /// Extract one record per qualifying element.
    ///
    /// Elements without a `class` attribute are skipped. A present but blank
    /// attribute yields a record with an empty class set and a count of zero.
    /// Nested elements are recorded independently.
    pub fn extract(&self, text: &str, location: &str) -> Vec<ElementRecord> {
        let records: Vec<ElementRecord> = self
            .scanner
            .scan(text, &self.kinds)
            .into_iter()
            .filter_map(|sighting| {
                let classes = ClassSet::from_attribute(sighting.class_attr.as_deref()?);
                Some(ElementRecord::new(sighting.name, classes, location))
            })
            .collect();

        trace!(location, records = records.len(), "Extracted records");
        records
    }
}
