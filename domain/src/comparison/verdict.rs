//! Verdicts derived from a pair of query results

use super::format::DataFormat;
use super::result::QueryResult;
use std::time::Duration;

/// Latency differences below this are reported as similar.
pub const SIMILAR_LATENCY_THRESHOLD: Duration = Duration::from_millis(500);

/// Which format answered faster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatencyVerdict {
    Similar { difference: Duration },
    Faster { format: DataFormat, by: Duration },
    /// At least one query failed, so its latency says nothing about the format.
    NotComparable,
}

impl LatencyVerdict {
    pub fn between(json: &QueryResult, alternative: &QueryResult) -> Self {
        if !json.is_success() || !alternative.is_success() {
            return LatencyVerdict::NotComparable;
        }

        let (format, difference) = if json.latency >= alternative.latency {
            (DataFormat::Alternative, json.latency - alternative.latency)
        } else {
            (DataFormat::Json, alternative.latency - json.latency)
        };

        if difference < SIMILAR_LATENCY_THRESHOLD {
            LatencyVerdict::Similar { difference }
        } else {
            LatencyVerdict::Faster {
                format,
                by: difference,
            }
        }
    }
}

/// Case-insensitive comparison of two successful responses.
///
/// Failed results never match.
pub fn responses_match(json: &QueryResult, alternative: &QueryResult) -> bool {
    json.is_success()
        && alternative.is_success()
        && json.response.trim().to_lowercase() == alternative.response.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::request::QueryRequest;
    use chrono::Utc;

    fn ok(format: DataFormat, response: &str, millis: u64) -> QueryResult {
        QueryResult::success(
            &QueryRequest::new(format, "p"),
            response,
            Utc::now(),
            Duration::from_millis(millis),
        )
    }

    fn failed(format: DataFormat) -> QueryResult {
        QueryResult::failure(
            &QueryRequest::new(format, "p"),
            "boom",
            Utc::now(),
            Duration::from_millis(10),
        )
    }

    #[test]
    fn test_similar_below_threshold() {
        let verdict = LatencyVerdict::between(
            &ok(DataFormat::Json, "a", 1000),
            &ok(DataFormat::Alternative, "a", 1400),
        );
        assert_eq!(
            verdict,
            LatencyVerdict::Similar {
                difference: Duration::from_millis(400)
            }
        );
    }

    #[test]
    fn test_alternative_faster() {
        let verdict = LatencyVerdict::between(
            &ok(DataFormat::Json, "a", 2000),
            &ok(DataFormat::Alternative, "a", 1000),
        );
        assert_eq!(
            verdict,
            LatencyVerdict::Faster {
                format: DataFormat::Alternative,
                by: Duration::from_millis(1000)
            }
        );
    }

    #[test]
    fn test_json_faster_is_symmetric() {
        let verdict = LatencyVerdict::between(
            &ok(DataFormat::Json, "a", 1000),
            &ok(DataFormat::Alternative, "a", 1500),
        );
        assert_eq!(
            verdict,
            LatencyVerdict::Faster {
                format: DataFormat::Json,
                by: Duration::from_millis(500)
            }
        );
    }

    #[test]
    fn test_failed_query_is_not_comparable() {
        let verdict = LatencyVerdict::between(
            &failed(DataFormat::Json),
            &ok(DataFormat::Alternative, "a", 1000),
        );
        assert_eq!(verdict, LatencyVerdict::NotComparable);
    }

    #[test]
    fn test_responses_match_ignores_case_and_outer_whitespace() {
        assert!(responses_match(
            &ok(DataFormat::Json, "Names: A\n", 1),
            &ok(DataFormat::Alternative, "names: a", 1),
        ));
        assert!(!responses_match(
            &ok(DataFormat::Json, "A", 1),
            &ok(DataFormat::Alternative, "B", 1),
        ));
    }

    #[test]
    fn test_failures_never_match() {
        assert!(!responses_match(
            &failed(DataFormat::Json),
            &failed(DataFormat::Alternative)
        ));
    }
}
