//! Console output formatter for comparison results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use std::path::Path;
use toonbench_domain::{
    ComparisonRecord, ConvertedDataset, DataFormat, Dataset, LatencyVerdict, Model, QueryResult,
    percent_saved,
};

const WIDTH: usize = 60;

/// Formats comparison results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete comparison summary
    pub fn format(record: &ComparisonRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Comparison Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Dataset: ".cyan().bold(),
            record.source_file
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            record.question
        ));
        output.push_str(&format!("{} {}\n", "Model:   ".cyan().bold(), record.model));

        output.push_str(&Self::section_header("Size"));
        output.push_str(&Self::size_lines(
            &record.alternative_format,
            record.json_chars,
            record.alternative_chars,
        ));

        for result in [&record.json, &record.alternative] {
            output.push_str(&Self::response_section(result, &record.alternative_format));
        }

        output.push_str(&Self::section_header("Verdict"));
        if record.responses_identical {
            output.push_str(&format!("  {}\n", "Responses are IDENTICAL".green().bold()));
        } else {
            output.push_str(&format!(
                "  {}\n",
                "Responses DIFFER (manual review recommended)".yellow().bold()
            ));
        }
        output.push_str(&format!(
            "  {} {}\n",
            "Latency:".bold(),
            Self::latency_line(&record.latency_verdict(), &record.alternative_format)
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Turn colored output off for the rest of the process
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format as JSON
    pub fn format_json(record: &ComparisonRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Title banner printed at startup
    pub fn banner(model: &Model, format_name: &str) -> String {
        Self::header(&format!("JSON vs {format_name} on {model}"))
    }

    /// Character counts of both renderings, printed before querying
    pub fn dataset_stats(dataset: &Dataset, converted: &ConvertedDataset) -> String {
        Self::size_lines(
            converted.format_name(),
            dataset.char_count(),
            converted.char_count(),
        )
    }

    /// Confirmation after the record was written
    pub fn saved(path: &Path, total_records: usize) -> String {
        format!(
            "{} {} ({} record{})",
            "Results appended to".dimmed(),
            path.display(),
            total_records,
            if total_records == 1 { "" } else { "s" }
        )
    }

    fn size_lines(format_name: &str, json_chars: usize, alternative_chars: usize) -> String {
        let saved = percent_saved(json_chars, alternative_chars);
        let change = if saved >= 0.0 {
            format!("{saved:.1}% smaller").green()
        } else {
            format!("{:.1}% larger", -saved).red()
        };
        let width = format_name.len().max(4) + 1;
        format!(
            "  {:<width$} {:>8} chars\n  {:<width$} {:>8} chars ({})\n",
            "JSON:",
            json_chars,
            format!("{format_name}:"),
            alternative_chars,
            change,
        )
    }

    fn response_section(result: &QueryResult, alternative_name: &str) -> String {
        let name = result.format.display_name(alternative_name);
        let title = format!(
            "{} response ({:.2}s)",
            name,
            result.latency.as_secs_f64()
        );
        match &result.error {
            None => format!("{}{}\n", Self::section_header(&title), result.response.trim_end()),
            Some(error) => format!(
                "{}{} {}\n",
                Self::section_header(&title),
                "Error:".red().bold(),
                error
            ),
        }
    }

    fn latency_line(verdict: &LatencyVerdict, alternative_name: &str) -> String {
        match verdict {
            LatencyVerdict::Similar { difference } => format!(
                "SIMILAR (difference {:.2}s)",
                difference.as_secs_f64()
            ),
            LatencyVerdict::Faster { format, by } => {
                let name = format.display_name(alternative_name);
                let line = format!("{} faster by {:.2}s", name, by.as_secs_f64());
                match format {
                    DataFormat::Json => line.normal().to_string(),
                    DataFormat::Alternative => line.green().to_string(),
                }
            }
            LatencyVerdict::NotComparable => "not comparable (a query failed)".dimmed().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{:^WIDTH$}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(WIDTH).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, record: &ComparisonRecord) -> String {
        Self::format(record)
    }

    fn format_json(&self, record: &ComparisonRecord) -> String {
        Self::format_json(record)
    }
}
