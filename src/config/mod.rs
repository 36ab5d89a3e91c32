//! Configuration for classmap runs.
//!
//! Settings come from three layers, later layers winning: built-in defaults,
//! a `.classmap.toml` project file and command-line flags. The file layer is
//! described by [`ClassmapConfig`]; the merged result is an [`AnalyzeConfig`].

pub mod analysis_config;
mod loader;

pub use analysis_config::{AnalyzeConfig, AnalyzeOverrides};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME, MAX_TRAVERSAL_DEPTH,
};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::aggregation::Thresholds;
use crate::errors::{Error, Result};
use crate::extraction::DEFAULT_ELEMENT;
use crate::io::DEFAULT_EXTENSION;
use crate::output::OutputFormat;
use crate::pipeline::ReadErrorPolicy;

pub const DEFAULT_OUTPUT_STEM: &str = "template_analysis";

/// Root configuration structure for classmap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassmapConfig {
    pub thresholds: Thresholds,
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Which documents are read and which elements qualify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Element names that qualify for extraction
    pub elements: Vec<String>,
    /// File extensions considered documents when walking a directory
    pub extensions: Vec<String>,
    /// Glob patterns excluded from the walk
    pub ignore: Vec<String>,
    pub respect_gitignore: bool,
    pub on_read_error: ReadErrorPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            elements: vec![DEFAULT_ELEMENT.to_string()],
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            ignore: vec![],
            respect_gitignore: false,
            on_read_error: ReadErrorPolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Report destination; the format's extension is appended when missing
    pub path: PathBuf,
    pub format: OutputFormat,
    /// Report file names instead of full paths
    pub short_paths: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_STEM),
            format: OutputFormat::Csv,
            short_paths: false,
        }
    }
}

impl ClassmapConfig {
    /// Check every setting, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.scan.elements.is_empty() {
            problems.push("scan.elements must list at least one element name".to_string());
        }
        for name in &self.scan.elements {
            if name.trim().is_empty() || name.trim().contains(char::is_whitespace) {
                problems.push(format!("scan.elements: '{}' is not a valid element name", name));
            }
        }

        if self.scan.extensions.is_empty() {
            problems.push("scan.extensions must list at least one extension".to_string());
        }
        for ext in &self.scan.extensions {
            if ext.trim_start_matches('.').is_empty() {
                problems.push(format!("scan.extensions: '{}' is not a valid extension", ext));
            }
        }

        for pattern in &self.scan.ignore {
            if let Err(e) = glob::Pattern::new(pattern) {
                problems.push(format!("scan.ignore: invalid pattern '{}': {}", pattern, e));
            }
        }

        if self.output.path.as_os_str().is_empty() {
            problems.push("output.path must not be empty".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::configuration(problems.join("; ")))
        }
    }
}
