//! JSON array results file.
//!
//! The file holds one JSON array of records in run order. Every append reads
//! and validates the whole file, pushes the new record and rewrites the file
//! through a temporary sibling that is renamed into place, so a failure
//! part-way never leaves a truncated file behind.
//!
//! Existing entries are kept as raw JSON values: records written by older or
//! newer versions survive untouched.

use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use toonbench_application::{PersistenceError, ResultStore};
use toonbench_domain::ComparisonRecord;
use tracing::{debug, info};

/// File name used when no results file is configured
pub const DEFAULT_RESULTS_FILE: &str = "test_results.json";

/// Results file holding a JSON array of comparison records
#[derive(Debug, Clone)]
pub struct JsonResultStore {
    path: PathBuf,
}

impl JsonResultStore {
    /// Open the store, checking that an existing file is a readable JSON array.
    ///
    /// A missing or empty file is fine; nothing is written until
    /// [`ResultStore::append`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let store = Self { path: path.into() };
        let existing = store.read_records()?;
        debug!(
            "Results file {} holds {} record(s)",
            store.path.display(),
            existing.len()
        );
        Ok(store)
    }

    /// Default location: `test_results.json` next to the dataset
    pub fn default_path_for(dataset_path: &Path) -> PathBuf {
        dataset_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(DEFAULT_RESULTS_FILE)
    }

    fn read_records(&self) -> Result<Vec<Value>, PersistenceError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&text) {
            Ok(Value::Array(records)) => Ok(records),
            Ok(_) => Err(PersistenceError::NotAnArray {
                path: self.path.clone(),
            }),
            Err(source) => Err(PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_records(&self, records: &[Value]) -> Result<(), PersistenceError> {
        let write_error = |source: std::io::Error| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };

        let mut bytes = serde_json::to_vec_pretty(records)?;
        bytes.push(b'\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
        tmp.write_all(&bytes).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;

        // Keep the permissions of the file being replaced
        if let Ok(metadata) = std::fs::metadata(&self.path) {
            std::fs::set_permissions(tmp.path(), metadata.permissions()).map_err(write_error)?;
        }

        tmp.persist(&self.path).map_err(|e| write_error(e.error))?;
        Ok(())
    }
}

impl ResultStore for JsonResultStore {
    fn append(&self, record: &ComparisonRecord) -> Result<usize, PersistenceError> {
        let mut records = self.read_records()?;
        records.push(serde_json::to_value(record)?);
        self.write_records(&records)?;

        info!(
            "Appended record #{} to {}",
            records.len(),
            self.path.display()
        );
        Ok(records.len())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
