//! LLM configuration from TOML (`[llm]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use toonbench_domain::Model;

/// Raw LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Model both queries are sent to
    pub model: String,
    /// Base URL of the Gemini API
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Per-request network timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            timeout_secs: 120,
        }
    }
}

impl FileLlmConfig {
    pub fn parse_model(&self) -> Model {
        // FromStr for Model is infallible
        self.model
            .trim()
            .parse()
            .unwrap_or_else(|never| match never {})
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "llm.timeout_secs",
                "timeout must be at least 1 second",
            ));
        }
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error("llm.model", "model name is empty"));
        }
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "llm.api_key_env",
                "credential variable name is empty",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            issues.push(ConfigIssue::error(
                "llm.base_url",
                format!("'{}' is not an http(s) URL", self.base_url),
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_known() {
        assert_eq!(FileLlmConfig::default().parse_model(), Model::Gemini20Flash);
    }

    #[test]
    fn test_custom_model_passes_through() {
        let config = FileLlmConfig {
            model: "gemini-exp-1206".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.parse_model(),
            Model::Custom("gemini-exp-1206".to_string())
        );
    }

    #[test]
    fn test_bad_base_url() {
        let config = FileLlmConfig {
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "llm.base_url");
    }
}
