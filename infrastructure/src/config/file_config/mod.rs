//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types where they are consumed.

mod comparison;
mod converter;
mod llm;
mod output;

pub use comparison::FileComparisonConfig;
pub use converter::FileConverterConfig;
pub use llm::FileLlmConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};

/// Severity of a configuration problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// The run cannot start with this value
    Error,
    /// Usable, but probably not what was intended
    Warning,
}

/// A single problem found by [`FileConfig::validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: IssueSeverity,
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            field,
            message: message.into(),
        }
    }

    pub fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            field,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// LLM provider settings
    pub llm: FileLlmConfig,
    /// Query dispatch and results settings
    pub comparison: FileComparisonConfig,
    /// External format converter
    pub converter: FileConverterConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.llm.validate());
        issues.extend(self.comparison.validate());
        issues.extend(self.converter.validate());
        issues
    }

    /// First blocking issue, if any
    pub fn first_error(&self) -> Option<ConfigIssue> {
        self.validate().into_iter().find(ConfigIssue::is_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toonbench_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[llm]
model = "gemini-2.5-pro"
api_key_env = "GEMINI_KEY"
timeout_secs = 60

[comparison]
delay_secs = 1.5
results_file = "out/results.json"

[converter]
program = "toon"
args = ["--encode"]
format_name = "TOON"

[output]
format = "json"
color = false
show_sample_questions = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.parse_model(), toonbench_domain::Model::Gemini25Pro);
        assert_eq!(config.llm.api_key_env, "GEMINI_KEY");
        assert_eq!(config.llm.timeout().as_secs(), 60);
        assert_eq!(config.comparison.delay_secs, 1.5);
        assert_eq!(
            config.comparison.results_file.as_deref(),
            Some(std::path::Path::new("out/results.json"))
        );
        assert_eq!(config.converter.args, vec!["--encode".to_string()]);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.output.show_sample_questions);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[llm]
model = "gemini-2.5-flash"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        // Defaults should apply
        assert_eq!(config.llm.timeout_secs, 120);
        assert_eq!(config.converter.program, "npx");
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.first_error().is_none());
    }

    #[test]
    fn test_validate_collects_every_section() {
        let mut config = FileConfig::default();
        config.llm.timeout_secs = 0;
        config.comparison.delay_secs = 0.0;
        config.converter.program = " ".to_string();

        let fields: Vec<_> = config.validate().into_iter().map(|i| i.field).collect();
        assert!(fields.contains(&"llm.timeout_secs"));
        assert!(fields.contains(&"comparison.delay_secs"));
        assert!(fields.contains(&"converter.program"));
        assert_eq!(config.first_error().unwrap().field, "llm.timeout_secs");
    }
}
