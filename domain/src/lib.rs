//! Domain layer for toonbench
//!
//! This crate contains the entities and value objects of a single comparison
//! run. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Dataset / ConvertedDataset
//!
//! - **Dataset**: the JSON document under test, validated once at load time
//! - **ConvertedDataset**: the same document re-encoded by the external
//!   converter into the alternative (token-efficient) notation
//!
//! ## QueryRequest / QueryResult
//!
//! Exactly two requests are issued per run, JSON first and the alternative
//! format second. Each produces one [`QueryResult`], which carries either the
//! verbatim response or the error that ended the call.
//!
//! ## ComparisonRecord
//!
//! The persisted outcome of one run. The results file is an ordered array
//! of these records.

pub mod comparison;
pub mod config;
pub mod core;
pub mod dataset;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use comparison::{
    format::DataFormat,
    record::{ComparisonRecord, RunMetadata},
    request::QueryRequest,
    result::QueryResult,
    verdict::{LatencyVerdict, SIMILAR_LATENCY_THRESHOLD, responses_match},
};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, question::Question};
pub use dataset::{ConvertedDataset, Dataset, percent_saved};
pub use prompt::PromptTemplate;
