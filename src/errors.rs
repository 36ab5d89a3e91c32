//! Shared error types for classmap runs.
//!
//! Every fatal condition of a run surfaces as one of these variants. Conditions
//! that are recovered locally (malformed markup) never reach this type, and an
//! empty corpus is reported as an outcome rather than an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for classmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// The analysis root is neither a readable file nor a traversable directory
    #[error("'{}' is not a path to a file or directory", path.display())]
    InvalidInputLocation { path: PathBuf },

    /// An individual document could not be read
    #[error("failed to read '{}': {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid thresholds, element lists, patterns or config files
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The extraction worker pool could not be started
    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),

    /// The report could not be written to its destination
    #[error("failed to write report to '{}': {message}", path.display())]
    Report { path: PathBuf, message: String },

    /// Directory traversal errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV encoding errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Config file syntax errors
    #[error("Configuration error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a document read error with path context
    pub fn document_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DocumentRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a worker pool startup error
    pub fn worker_pool(message: impl Into<String>) -> Self {
        Self::WorkerPool(message.into())
    }

    /// Create a report sink error
    pub fn report(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Report {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error was raised while resolving configuration,
    /// i.e. before any document was touched.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Toml(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
