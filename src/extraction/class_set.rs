use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Canonical, order-independent form of a `class` attribute.
///
/// Tokens are split on Unicode whitespace (so NBSP separates tokens too),
/// deduplicated by exact string equality, sorted ascending and joined with a
/// single space. Tokens are opaque: case is preserved and characters such as
/// `:` or `/` used by utility-class variants are never interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClassSet {
    canonical: String,
    count: usize,
}

impl ClassSet {
    pub fn from_attribute(raw: &str) -> Self {
        let tokens: BTreeSet<&str> = raw.split_whitespace().collect();
        let count = tokens.len();
        let canonical = tokens.into_iter().collect::<Vec<_>>().join(" ");
        Self { canonical, count }
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Number of distinct tokens.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.canonical.split(' ').filter(|t| !t.is_empty())
    }

    pub fn into_canonical(self) -> String {
        self.canonical
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Canonicalize a raw class attribute value.
pub fn normalize_class_attribute(raw: &str) -> String {
    ClassSet::from_attribute(raw).into_canonical()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_and_joins() {
        let set = ClassSet::from_attribute("w-auto align-center py-5");
        assert_eq!(set.as_str(), "align-center py-5 w-auto");
        assert_eq!(set.count(), 3);
    }

    #[test]
    fn test_permutations_share_canonical_form() {
        let a = ClassSet::from_attribute("align-center w-auto py-5");
        let b = ClassSet::from_attribute("w-auto align-center py-5");
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicates_are_removed_before_counting() {
        let set = ClassSet::from_attribute("btn btn btn-primary btn");
        assert_eq!(set.as_str(), "btn btn-primary");
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let set = ClassSet::from_attribute("  card\t\tshadow\n  p-4\r\n");
        assert_eq!(set.as_str(), "card p-4 shadow");
    }

    #[test]
    fn test_case_sensitive_tokens() {
        let set = ClassSet::from_attribute("Foo foo");
        assert_eq!(set.as_str(), "Foo foo");
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_variant_prefixes_are_opaque() {
        let set = ClassSet::from_attribute("md:flex hover:bg-blue-500 flex w-1/2");
        assert_eq!(set.as_str(), "flex hover:bg-blue-500 md:flex w-1/2");
        assert_eq!(set.count(), 4);
    }

    #[test]
    fn test_blank_attribute_is_empty_set() {
        let set = ClassSet::from_attribute("   ");
        assert!(set.is_empty());
        assert_eq!(set.as_str(), "");
        assert_eq!(set.tokens().count(), 0);
    }

    #[test]
    fn test_canonical_input_is_fixed_point() {
        let once = normalize_class_attribute("z y x y");
        assert_eq!(normalize_class_attribute(&once), once);
    }

    #[test]
    fn test_unicode_whitespace_separates_tokens() {
        let set = ClassSet::from_attribute("a\u{a0}b c");
        assert_eq!(set.as_str(), "a b c");
        assert_eq!(set.count(), 3);

        let set = ClassSet::from_attribute("b\u{2003}a\u{3000}b");
        assert_eq!(set.as_str(), "a b");
    }
}
