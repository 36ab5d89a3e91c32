// Test utility module for classmap integration tests
#![allow(dead_code)]

use classmap::{ElementRecord, Extractor};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The checked-in template tree used across integration tests.
pub fn fixture_site() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/fixtures/site")
}

/// Expected CSV for `fixture_site()` with default thresholds and short paths.
pub const FIXTURE_SITE_CSV: &str = "\
name,num_instances,classes,file_paths
div,3,card p-4 shadow,\"ex_file_1.html,ex_file_2.html\"
div,3,container mx-auto,\"ex_file_1.html,ex_file_2.html,nested_2.html\"
div,2,a b,nested_1.html
div,2,align-center py-5 w-auto,ex_file_1.html
div,2,footer text-sm,nested_2.html
";

/// Write `files` (relative path, contents) under a fresh temporary directory.
pub fn write_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, contents) in files {
        write_file(dir.path(), relative, contents);
    }
    dir
}

pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Markup containing one `<div>` per class attribute value.
pub fn divs(class_attrs: &[&str]) -> String {
    class_attrs
        .iter()
        .map(|c| format!("<div class=\"{}\"></div>\n", c))
        .collect()
}

/// Records for a synthetic document, using the default extractor.
pub fn records_for(class_attrs: &[&str], location: &str) -> Vec<ElementRecord> {
    Extractor::default().extract(&divs(class_attrs), location)
}
