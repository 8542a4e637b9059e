//! Query result value object

use super::format::DataFormat;
use super::request::QueryRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Captured outcome of one [`QueryRequest`].
///
/// A failed call still produces a result: `error` is set and `response` is
/// empty. The latency is measured by the caller around the call, not taken
/// from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub format: DataFormat,
    pub prompt_chars: usize,
    pub response: String,
    #[serde(rename = "latency_secs", with = "super::serde_secs")]
    pub latency: Duration,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub error: Option<String>,
}

impl QueryResult {
    /// Result of a call that returned a response
    pub fn success(
        request: &QueryRequest,
        response: impl Into<String>,
        started_at: DateTime<Utc>,
        latency: Duration,
    ) -> Self {
        Self {
            format: request.format,
            prompt_chars: request.prompt_chars(),
            response: response.into(),
            latency,
            started_at,
            finished_at: finished(started_at, latency),
            error: None,
        }
    }

    /// Result of a call that failed
    pub fn failure(
        request: &QueryRequest,
        error: impl Into<String>,
        started_at: DateTime<Utc>,
        latency: Duration,
    ) -> Self {
        Self {
            format: request.format,
            prompt_chars: request.prompt_chars(),
            response: String::new(),
            latency,
            started_at,
            finished_at: finished(started_at, latency),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

fn finished(started_at: DateTime<Utc>, latency: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(latency)
        .ok()
        .and_then(|d| started_at.checked_add_signed(d))
        .unwrap_or(started_at)
}
