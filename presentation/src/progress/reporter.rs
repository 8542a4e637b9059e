//! Progress reporting for comparison runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use toonbench_application::ports::progress::ProgressNotifier;
use toonbench_domain::{DataFormat, QueryResult};

fn step_label(index: usize, total: usize) -> String {
    format!("[{index}/{total}]")
}

fn outcome_line(result: &QueryResult) -> String {
    match &result.error {
        None => format!(
            "{} answered in {:.2}s",
            "v".green(),
            result.latency.as_secs_f64()
        ),
        Some(e) => format!(
            "{} failed after {:.2}s: {}",
            "x".red(),
            result.latency.as_secs_f64(),
            e
        ),
    }
}

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, prefix: String, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_query_start(&self, index: usize, total: usize, _format: DataFormat, display_name: &str) {
        self.start_spinner(
            step_label(index, total),
            format!("Querying with {display_name} format..."),
        );
    }

    fn on_query_complete(&self, result: &QueryResult) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            let message = format!("{} {}", pb.message(), outcome_line(result));
            pb.set_style(
                ProgressStyle::with_template("  {prefix:.bold.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.finish_with_message(message);
        }
    }

    fn on_delay(&self, delay: Duration) {
        self.start_spinner(
            "     ".to_string(),
            format!("Waiting {:.1}s before the next query", delay.as_secs_f64()),
        );
    }
}

/// Plain line-based progress, for when stderr is not a terminal
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_query_start(&self, index: usize, total: usize, _format: DataFormat, display_name: &str) {
        eprintln!(
            "{} Querying with {} format...",
            step_label(index, total).cyan(),
            display_name.bold()
        );
    }

    fn on_query_complete(&self, result: &QueryResult) {
        eprintln!("      {}", outcome_line(result));
    }

    fn on_delay(&self, delay: Duration) {
        eprintln!(
            "      {}",
            format!("waiting {:.1}s...", delay.as_secs_f64()).dimmed()
        );
    }
}
