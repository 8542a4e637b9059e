//! Progress notification port
//!
//! Defines the interface for reporting progress during a comparison run.

use std::time::Duration;
use toonbench_domain::{DataFormat, QueryResult};

/// Callback for progress updates during a comparison run
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called right before a query is sent. `index` is 1-based.
    fn on_query_start(&self, index: usize, total: usize, format: DataFormat, display_name: &str);

    /// Called when a query finished, successfully or not
    fn on_query_complete(&self, result: &QueryResult);

    /// Called before the pause between the two queries
    fn on_delay(&self, _delay: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_query_start(&self, _index: usize, _total: usize, _format: DataFormat, _name: &str) {}
    fn on_query_complete(&self, _result: &QueryResult) {}
}
