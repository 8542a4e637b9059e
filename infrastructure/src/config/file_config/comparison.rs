//! Comparison configuration from TOML (`[comparison]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Raw comparison configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileComparisonConfig {
    /// Pause between the two queries, in seconds
    pub delay_secs: f64,
    /// Results file; defaults to `test_results.json` next to the dataset
    pub results_file: Option<PathBuf>,
}

impl Default for FileComparisonConfig {
    fn default() -> Self {
        Self {
            delay_secs: 2.0,
            results_file: None,
        }
    }
}

impl FileComparisonConfig {
    /// The validated delay. `None` when the value is not a positive number.
    pub fn delay(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.delay_secs)
            .ok()
            .filter(|d| !d.is_zero())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.delay().is_none() {
            issues.push(ConfigIssue::error(
                "comparison.delay_secs",
                format!("delay must be a positive number, got {}", self.delay_secs),
            ));
        } else if self.delay_secs > 60.0 {
            issues.push(ConfigIssue::warning(
                "comparison.delay_secs",
                format!("{}s between queries is unusually long", self.delay_secs),
            ));
        }
        issues
    }
}
