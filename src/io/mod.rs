pub mod destinations;
pub mod walker;

// Re-export I/O types for convenient access
pub use destinations::{
    resolve_output_path, FileDestination, MemoryDestination, OutputDestination, StdoutDestination,
};
pub use walker::{DocumentWalker, DEFAULT_EXTENSION};

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::document_read(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
