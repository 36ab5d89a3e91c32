use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::ClassmapConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".classmap.toml";
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ClassmapConfig> {
    let config = toml::from_str::<ClassmapConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly named config file. Unlike discovery, a missing file is an error.
pub fn load_config_from(path: &Path) -> Result<ClassmapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration(format!("cannot read '{}': {}", path.display(), e))
    })?;
    parse_config_at(path, &contents)
}

fn parse_config_at(path: &Path, contents: &str) -> Result<ClassmapConfig> {
    let config = parse_and_validate_config(contents).map_err(|e| {
        let message = e.to_string();
        let detail = message
            .strip_prefix("Configuration error: ")
            .unwrap_or(&message);
        Error::configuration(format!("{}: {}", path.display(), detail))
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered path; `None` when it cannot be read
fn try_load_config_from_path(config_path: &Path) -> Result<Option<ClassmapConfig>> {
    match read_config_file(config_path) {
        Ok(contents) => parse_config_at(config_path, &contents).map(Some),
        Err(e) => {
            handle_read_error(config_path, &e);
            Ok(None)
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.classmap.toml` above `start`, or fall back to defaults.
///
/// A config file that exists but does not parse or validate is an error.
pub fn load_config(start: &Path) -> Result<ClassmapConfig> {
    for dir in directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = try_load_config_from_path(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(config);
        }
    }

    log::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(ClassmapConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::Thresholds;
    use crate::output::OutputFormat;
    use crate::pipeline::ReadErrorPolicy;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [thresholds]
            min_classes = 3
            min_occurrences = 4

            [scan]
            elements = ["div", "section"]
            extensions = ["html", "htm"]
            ignore = ["**/vendor/**"]
            respect_gitignore = true
            on_read_error = "skip"

            [output]
            path = "reports/components"
            format = "json"
            short_paths = true
        "#})
        .unwrap();

        assert_eq!(config.thresholds, Thresholds::new(3, 4));
        assert_eq!(config.scan.elements, vec!["div", "section"]);
        assert!(config.scan.respect_gitignore);
        assert_eq!(config.scan.on_read_error, ReadErrorPolicy::Skip);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.short_paths);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_and_validate_config("[thresholds]\nmin_occurrences = 5\n").unwrap();
        assert_eq!(config.thresholds, Thresholds::new(1, 5));
        assert_eq!(config.scan, crate::config::ScanConfig::default());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = parse_and_validate_config("[thresholds]\nmin_classes = -2\n").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_non_integer_threshold_rejected() {
        let err = parse_and_validate_config("[thresholds]\nmin_occurrences = \"two\"\n").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(parse_and_validate_config("[thresholds]\nmin_class = 2\n").is_err());
        assert!(parse_and_validate_config("[extra]\n").is_err());
    }

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_discovery_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("site/pages");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nmin_occurrences = 7\n",
        )
        .unwrap();

        let config = load_config(&nested).unwrap();
        assert_eq!(config.thresholds.min_occurrences, 7);
    }

    #[test]
    fn test_discovered_invalid_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[thresholds\n").unwrap();
        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_configuration());
    }
}
