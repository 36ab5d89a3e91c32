//! Output destination abstractions for report writers.
//!
//! Reports are rendered fully in memory and then handed to an
//! `OutputDestination` in one call, so a failed run never leaves a partially
//! written report behind.
//!
//! # Example
//!
//! ```rust
//! use classmap::io::destinations::{MemoryDestination, OutputDestination};
//!
//! let dest = MemoryDestination::new();
//! dest.write_bytes(b"name,num_instances,classes,file_paths\n").unwrap();
//! assert!(dest.get_content().starts_with("name,"));
//! ```

use crate::errors::{Error, Result};
use crate::io::ensure_dir;
use crate::output::OutputFormat;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Trait for destinations that receive a rendered report.
pub trait OutputDestination: Send + Sync {
    /// Write the complete report.
    fn write_bytes(&self, content: &[u8]) -> Result<()>;

    /// Get a description of the destination for messages.
    fn description(&self) -> String;
}

/// Append the format's default extension when `path` has none.
pub fn resolve_output_path(path: &Path, format: OutputFormat) -> PathBuf {
    match (path.extension(), format.extension()) {
        (None, Some(ext)) => {
            let mut raw = path.as_os_str().to_owned();
            raw.push(".");
            raw.push(ext);
            PathBuf::from(raw)
        }
        _ => path.to_path_buf(),
    }
}

/// File system output destination.
///
/// Creates missing parent directories, writes to a sibling temporary file and
/// renames it over the target.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

impl OutputDestination for FileDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent).map_err(|e| {
                Error::report(
                    &self.path,
                    format!("cannot create directory '{}': {}", parent.display(), e),
                )
            })?;
        }

        let temp = self.temp_path();
        let written = fs::write(&temp, content).and_then(|_| fs::rename(&temp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(Error::report(&self.path, e.to_string()));
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        Ok(())
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// In-memory output destination for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<Vec<u8>>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the captured content as a string.
    pub fn get_content(&self) -> String {
        self.buffer
            .read()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<()> {
        let mut buffer = self
            .buffer
            .write()
            .map_err(|_| io::Error::other("memory destination lock poisoned"))?;
        buffer.extend_from_slice(content);
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_appends_default_extension() {
        assert_eq!(
            resolve_output_path(Path::new("report"), OutputFormat::Csv),
            PathBuf::from("report.csv")
        );
        assert_eq!(
            resolve_output_path(Path::new("out/report"), OutputFormat::Json),
            PathBuf::from("out/report.json")
        );
        assert_eq!(
            resolve_output_path(Path::new("./report"), OutputFormat::Csv),
            PathBuf::from("./report.csv")
        );
    }

    #[test]
    fn test_resolve_keeps_existing_extension() {
        assert_eq!(
            resolve_output_path(Path::new("report.txt"), OutputFormat::Csv),
            PathBuf::from("report.txt")
        );
    }

    #[test]
    fn test_file_destination_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested/deeper/report.csv");
        FileDestination::new(target.clone())
            .write_bytes(b"name\n")
            .unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "name\n");
        // no temporary file is left next to the report
        let leftovers = fs::read_dir(target.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_file_destination_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("report.csv");
        fs::write(&target, "old contents that are longer").unwrap();
        FileDestination::new(target.clone()).write_bytes(b"new").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_file_destination_failure_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();
        let err = FileDestination::new(target.clone()).write_bytes(b"data").unwrap_err();
        assert!(matches!(err, Error::Report { .. }));
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_memory_destination_captures() {
        let dest = MemoryDestination::new();
        dest.write_bytes(b"a,").unwrap();
        dest.write_bytes(b"b").unwrap();
        assert_eq!(dest.get_content(), "a,b");
        assert_eq!(dest.description(), "memory");
    }
}
