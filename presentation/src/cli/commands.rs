//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use toonbench_domain::{OutputFormat as RunOutput, Question};

/// Output format for comparison results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Side-by-side summary with verdicts
    Summary,
    /// The appended record as JSON
    Json,
}

impl From<OutputFormat> for RunOutput {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => RunOutput::Summary,
            OutputFormat::Json => RunOutput::Json,
        }
    }
}

/// CLI arguments for toonbench
#[derive(Parser, Debug)]
#[command(name = "toonbench")]
#[command(author, version, about = "Compare LLM answers for JSON versus a compact data format")]
#[command(long_about = r#"
toonbench asks an LLM the same question about a dataset twice: once with the
data as JSON and once converted to a more compact format (TOON by default).
Both answers, their latencies and the character counts are appended to a JSON
results file for later analysis.

The two queries run one after the other with a fixed pause in between.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./toonbench.toml    Project-level config
3. ~/.config/toonbench/config.toml   Global config

Example:
  toonbench data.json "list all names"
  toonbench data.json list all names older than 30
  toonbench --delay-secs 5 -m gemini-2.5-flash data.json
"#)]
pub struct Cli {
    /// JSON dataset to query
    #[arg(
        value_name = "JSON_FILE",
        required_unless_present_any = ["list_models", "show_config"]
    )]
    pub dataset: Option<PathBuf>,

    /// Question to ask; several words are joined with spaces.
    /// Prompted for interactively when omitted. Use `--` before a
    /// question that starts with `-`.
    #[arg(value_name = "QUESTION")]
    pub question: Vec<String>,

    /// Model to query
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Pause between the two queries, in seconds
    #[arg(long, value_name = "SECS")]
    pub delay_secs: Option<f64>,

    /// Network timeout per query, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Results file to append to (default: test_results.json next to the dataset)
    #[arg(short, long, value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// Converter program to run instead of the configured one.
    /// It is called with the dataset path as its only argument.
    #[arg(long, value_name = "PROGRAM")]
    pub converter: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Also write the converted text next to the dataset
    #[arg(long)]
    pub save_converted: bool,

    /// List models available to the API key and exit
    #[arg(long)]
    pub list_models: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banner and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The question given on the command line, if any.
    ///
    /// Words given but all blank are an error rather than a reason to prompt.
    pub fn question(&self) -> Result<Option<Question>, toonbench_domain::DomainError> {
        Question::from_words(&self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("toonbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trailing_words_form_question() {
        let cli = parse(&["data.json", "list", "all", "names"]);
        assert_eq!(cli.dataset, Some(PathBuf::from("data.json")));
        let question = cli.question().unwrap().unwrap();
        assert_eq!(question.content(), "list all names");
    }

    #[test]
    fn test_flags_after_question_words_are_still_flags() {
        let cli = parse(&["data.json", "list", "names", "--delay-secs", "5"]);
        assert_eq!(cli.delay_secs, Some(5.0));
        assert_eq!(cli.question().unwrap().unwrap().content(), "list names");
    }

    #[test]
    fn test_double_dash_allows_leading_hyphen() {
        let cli = parse(&["data.json", "--", "-1", "is", "negative?"]);
        assert_eq!(cli.question().unwrap().unwrap().content(), "-1 is negative?");
    }

    #[test]
    fn test_question_is_optional() {
        let cli = parse(&["data.json"]);
        assert!(cli.question().unwrap().is_none());
    }

    #[test]
    fn test_blank_question_is_error() {
        let cli = parse(&["data.json", "  "]);
        assert!(cli.question().is_err());
    }

    #[test]
    fn test_dataset_required_for_a_run() {
        let result = Cli::try_parse_from(["toonbench"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_models_needs_no_dataset() {
        let cli = parse(&["--list-models"]);
        assert!(cli.list_models);
        assert!(cli.dataset.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&[
            "-m",
            "gemini-2.5-pro",
            "--delay-secs",
            "0.5",
            "--timeout-secs",
            "30",
            "--output",
            "json",
            "-vv",
            "data.json",
            "q",
        ]);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(cli.delay_secs, Some(0.5));
        assert_eq!(cli.timeout_secs, Some(30));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(RunOutput::from(OutputFormat::Json), RunOutput::Json);
    }
}
