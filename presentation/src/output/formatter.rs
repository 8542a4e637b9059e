//! Output formatter trait

use toonbench_domain::{ComparisonRecord, OutputFormat};

/// Trait for formatting comparison records
pub trait OutputFormatter {
    /// Format the human-readable summary
    fn format(&self, record: &ComparisonRecord) -> String;

    /// Format as JSON
    fn format_json(&self, record: &ComparisonRecord) -> String;

    /// Format in the requested output format
    fn render(&self, record: &ComparisonRecord, format: OutputFormat) -> String {
        match format {
            OutputFormat::Summary => self.format(record),
            OutputFormat::Json => self.format_json(record),
        }
    }
}
