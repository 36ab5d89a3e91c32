//! Best-effort markup scanning.
//!
//! A [`MarkupScanner`] turns raw document text into element sightings. It never
//! fails: malformed or truncated markup is recovered by the underlying parser
//! and whatever elements it could identify are returned.

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::{ElementRef, Html};
use std::collections::BTreeSet;
use tracing::{debug, trace};

pub const DEFAULT_ELEMENT: &str = "div";

/// Element names that qualify for extraction.
///
/// Matching is ASCII case-insensitive, as HTML element names are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementKinds {
    names: BTreeSet<String>,
}

impl ElementKinds {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_ascii_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ElementKinds {
    fn default() -> Self {
        Self::new([DEFAULT_ELEMENT])
    }
}

/// An element of a qualifying kind, as seen in the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementSighting {
    pub name: String,
    /// Raw `class` attribute value, `None` when the attribute is absent
    pub class_attr: Option<String>,
}

pub trait MarkupScanner: Send + Sync {
    /// Yield every element of a qualifying kind, in document order.
    fn scan(&self, text: &str, kinds: &ElementKinds) -> Vec<ElementSighting>;
}

/// Scanner backed by the html5ever tree builder.
///
/// Scripting is disabled so `<noscript>` content is parsed as markup rather
/// than raw text; only `script` and `style` bodies stay opaque.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlScanner;

impl MarkupScanner for HtmlScanner {
    fn scan(&self, text: &str, kinds: &ElementKinds) -> Vec<ElementSighting> {
        let document = parse_markup(text);
        if !document.errors.is_empty() {
            debug!(
                recovered = document.errors.len(),
                "Recovered from malformed markup"
            );
            for error in &document.errors {
                trace!("parse error: {}", error);
            }
        }

        document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| kinds.matches(element.value().name()))
            .map(|element| ElementSighting {
                name: element.value().name().to_string(),
                class_attr: element.value().attr("class").map(str::to_string),
            })
            .collect()
    }
}

fn parse_markup(text: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::parse_document(Html::new_document(), opts).one(text)
}
