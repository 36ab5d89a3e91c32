//! Resolved configuration for one `analyze` run.
//!
//! [`AnalyzeOverrides`] carries whatever the command line set explicitly;
//! [`AnalyzeConfig::resolve`] lays it over a [`ClassmapConfig`] and validates
//! the merged result before any document is read.

use std::path::PathBuf;

use super::ClassmapConfig;
use crate::aggregation::Thresholds;
use crate::errors::{Error, Result};
use crate::extraction::ElementKinds;
use crate::io::resolve_output_path;
use crate::output::OutputFormat;
use crate::pipeline::{CorpusOptions, LocationStyle, ReadErrorPolicy};

/// Values given on the command line. `None`/`false` defer to the config file.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOverrides {
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub min_classes: Option<usize>,
    pub min_occurrences: Option<usize>,
    pub short: bool,
    pub elements: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub gitignore: bool,
    pub on_read_error: Option<ReadErrorPolicy>,
    pub no_parallel: bool,
    pub jobs: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// Report file, already carrying the format's extension; `None` for stdout formats
    pub output: Option<PathBuf>,
    pub thresholds: Thresholds,
    pub elements: Vec<String>,
    pub extensions: Vec<String>,
    pub ignore: Vec<String>,
    pub respect_gitignore: bool,
    pub location_style: LocationStyle,
    pub read_error_policy: ReadErrorPolicy,
    pub parallel: bool,
    pub jobs: usize,
}

impl AnalyzeConfig {
    pub fn resolve(path: PathBuf, file: ClassmapConfig, cli: AnalyzeOverrides) -> Result<Self> {
        let mut merged = file;
        if let Some(min_classes) = cli.min_classes {
            merged.thresholds.min_classes = min_classes;
        }
        if let Some(min_occurrences) = cli.min_occurrences {
            merged.thresholds.min_occurrences = min_occurrences;
        }
        if let Some(elements) = cli.elements {
            merged.scan.elements = elements;
        }
        if let Some(extensions) = cli.extensions {
            merged.scan.extensions = extensions;
        }
        if let Some(ignore) = cli.ignore {
            merged.scan.ignore = ignore;
        }
        if let Some(policy) = cli.on_read_error {
            merged.scan.on_read_error = policy;
        }
        if let Some(output) = cli.output {
            merged.output.path = output;
        }
        if let Some(format) = cli.format {
            merged.output.format = format;
        }
        merged.scan.respect_gitignore |= cli.gitignore;
        merged.output.short_paths |= cli.short;
        merged.validate()?;

        if cli.jobs == Some(0) {
            return Err(Error::configuration("--jobs must be at least 1"));
        }

        let format = merged.output.format;
        let output = format
            .writes_file()
            .then(|| resolve_output_path(&merged.output.path, format));

        Ok(Self {
            path,
            format,
            output,
            thresholds: merged.thresholds,
            elements: merged.scan.elements,
            extensions: merged.scan.extensions,
            ignore: merged.scan.ignore,
            respect_gitignore: merged.scan.respect_gitignore,
            location_style: LocationStyle::from_short_flag(merged.output.short_paths),
            read_error_policy: merged.scan.on_read_error,
            parallel: !cli.no_parallel,
            jobs: cli.jobs.unwrap_or(0),
        })
    }

    pub fn element_kinds(&self) -> ElementKinds {
        ElementKinds::new(&self.elements)
    }

    pub fn corpus_options(&self) -> CorpusOptions {
        CorpusOptions {
            location_style: self.location_style,
            read_error_policy: self.read_error_policy,
            parallel: self.parallel,
            jobs: self.jobs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(file: ClassmapConfig, cli: AnalyzeOverrides) -> Result<AnalyzeConfig> {
        AnalyzeConfig::resolve(PathBuf::from("site"), file, cli)
    }

    #[test]
    fn test_defaults() {
        let config = resolve(ClassmapConfig::default(), AnalyzeOverrides::default()).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("template_analysis.csv")));
        assert_eq!(config.thresholds, Thresholds::default());
        assert_eq!(config.location_style, LocationStyle::Full);
        assert_eq!(config.read_error_policy, ReadErrorPolicy::Abort);
        assert!(config.parallel);
        assert_eq!(config.jobs, 0);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = ClassmapConfig::default();
        file.thresholds = Thresholds::new(2, 3);
        file.output.format = OutputFormat::Json;

        let config = resolve(
            file,
            AnalyzeOverrides {
                min_occurrences: Some(1),
                output: Some(PathBuf::from("out/report")),
                short: true,
                on_read_error: Some(ReadErrorPolicy::Skip),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.thresholds, Thresholds::new(2, 1));
        assert_eq!(config.output, Some(PathBuf::from("out/report.json")));
        assert_eq!(config.location_style, LocationStyle::Basename);
        assert_eq!(config.read_error_policy, ReadErrorPolicy::Skip);
    }

    #[test]
    fn test_terminal_format_has_no_file() {
        let config = resolve(
            ClassmapConfig::default(),
            AnalyzeOverrides {
                format: Some(OutputFormat::Terminal),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_invalid_cli_elements_rejected() {
        let err = resolve(
            ClassmapConfig::default(),
            AnalyzeOverrides {
                elements: Some(vec![]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let err = resolve(
            ClassmapConfig::default(),
            AnalyzeOverrides {
                jobs: Some(0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_element_kinds_from_config() {
        let config = resolve(
            ClassmapConfig::default(),
            AnalyzeOverrides {
                elements: Some(vec!["Section".into(), "div".into()]),
                ..Default::default()
            },
        )
        .unwrap();
        let kinds = config.element_kinds();
        assert!(kinds.matches("section"));
        assert!(kinds.matches("div"));
    }
}
