//! Element extraction and class-set normalization.

pub mod class_set;
pub mod extractor;
pub mod scanner;

pub use class_set::{normalize_class_attribute, ClassSet};
pub use extractor::Extractor;
pub use scanner::{ElementKinds, ElementSighting, HtmlScanner, MarkupScanner, DEFAULT_ELEMENT};
