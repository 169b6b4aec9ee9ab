//! Error types for benchmark sessions.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a benchmark session or reject its configuration.
///
/// Per-pair problems (an unavailable algorithm, a failed allocation, a failed
/// operation) are not errors at this level: the runner reports them and moves
/// on to the next pair.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The report file could not be created.
    #[error("Unable to create {}: {source}", .path.display())]
    ReportUnavailable {
        /// Path that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to an already open report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A plan entry could not be parsed or contains characters the CSV cannot carry.
    #[error("Invalid plan entry '{entry}': {reason}")]
    InvalidPlanEntry {
        /// Entry as given.
        entry: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// A specialized Result type for sigbench operations.
pub type Result<T> = std::result::Result<T, BenchError>;
