//! Comparison record entity

use super::result::QueryResult;
use super::verdict::{LatencyVerdict, responses_match};
use crate::core::model::Model;
use crate::core::question::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Run-level facts recorded alongside the two query results.
#[derive(Debug, Clone)]
pub struct RunMetadata {
    pub source_file: String,
    pub question: Question,
    pub model: Model,
    pub alternative_format: String,
    pub json_chars: usize,
    pub alternative_chars: usize,
    pub delay_secs: f64,
}

/// The persisted outcome of one comparison run.
///
/// Field names are part of the results file schema and must stay stable;
/// new fields may be added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub timestamp: DateTime<Utc>,
    pub source_file: String,
    pub question: Question,
    pub model: Model,
    pub alternative_format: String,
    pub json_chars: usize,
    pub alternative_chars: usize,
    pub delay_secs: f64,
    pub json: QueryResult,
    pub alternative: QueryResult,
    pub responses_identical: bool,
}

impl ComparisonRecord {
    /// Assemble a record stamped with the current time.
    pub fn new(metadata: RunMetadata, json: QueryResult, alternative: QueryResult) -> Self {
        let responses_identical = responses_match(&json, &alternative);
        Self {
            timestamp: Utc::now(),
            source_file: metadata.source_file,
            question: metadata.question,
            model: metadata.model,
            alternative_format: metadata.alternative_format,
            json_chars: metadata.json_chars,
            alternative_chars: metadata.alternative_chars,
            delay_secs: metadata.delay_secs,
            json,
            alternative,
            responses_identical,
        }
    }

    pub fn latency_verdict(&self) -> LatencyVerdict {
        LatencyVerdict::between(&self.json, &self.alternative)
    }

    /// Both queries returned a response
    pub fn is_complete(&self) -> bool {
        self.json.is_success() && self.alternative.is_success()
    }
}
