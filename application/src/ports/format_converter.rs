//! Format converter port
//!
//! Re-encodes a JSON dataset file into the alternative notation.

use std::path::Path;
use thiserror::Error;
use toonbench_domain::ConvertedDataset;

/// Errors from the external conversion tool. All are fatal to a run.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to start converter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Converter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Converter produced no {format_name} output")]
    EmptyOutput { format_name: String },

    #[error("Converter output is not valid UTF-8")]
    InvalidUtf8,
}

/// Converter from a JSON file to the alternative format.
pub trait FormatConverter: Send + Sync {
    /// Display name of the produced notation (e.g. `TOON`)
    fn format_name(&self) -> &str;

    /// Convert the file at `path`. Never returns empty text.
    fn convert(&self, path: &Path) -> Result<ConvertedDataset, ConversionError>;
}
