//! Execution parameters for a comparison run

use std::time::Duration;
use toonbench_domain::Model;

/// Default pause between the two queries
pub const DEFAULT_QUERY_DELAY: Duration = Duration::from_secs(2);

/// Parameters for one comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonParams {
    /// Model both queries are sent to
    pub model: Model,
    /// Minimum pause between the start of the second query and the end of
    /// the first. Always non-zero.
    pub delay: Duration,
}

impl ComparisonParams {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            delay: DEFAULT_QUERY_DELAY,
        }
    }

    /// Override the inter-query delay. A zero delay is replaced by the default.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = if delay.is_zero() {
            DEFAULT_QUERY_DELAY
        } else {
            delay
        };
        self
    }
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self::new(Model::default())
    }
}
