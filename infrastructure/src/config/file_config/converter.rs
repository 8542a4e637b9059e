//! Converter configuration from TOML (`[converter]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Raw converter configuration
///
/// The dataset path is appended after `args` as the final argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConverterConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Name of the produced notation, used in prompts and output
    pub format_name: String,
}

impl Default for FileConverterConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["@toon-format/cli".to_string()],
            format_name: "TOON".to_string(),
        }
    }
}

impl FileConverterConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.program.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "converter.program",
                "converter program is empty",
            ));
        }
        if self.format_name.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "converter.format_name",
                "format name is empty",
            ));
        }
        issues
    }
}
