//! Result store port
//!
//! Persists comparison records in run order.

use std::path::{Path, PathBuf};
use thiserror::Error;
use toonbench_domain::ComparisonRecord;

/// Errors from the results file. All are fatal; none discard prior results.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Cannot read results file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Results file {} is not valid JSON: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Results file {} does not contain a JSON array", .path.display())]
    NotAnArray { path: PathBuf },

    #[error("Cannot write results file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot serialize comparison record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only store of comparison records
pub trait ResultStore: Send + Sync {
    /// Append one record, returning the number of records now stored.
    fn append(&self, record: &ComparisonRecord) -> Result<usize, PersistenceError>;

    /// Where the records are kept
    fn location(&self) -> &Path;
}
