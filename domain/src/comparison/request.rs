//! Query request value object

use super::format::DataFormat;

/// One self-contained prompt sent to the LLM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub format: DataFormat,
    pub prompt: String,
}

impl QueryRequest {
    pub fn new(format: DataFormat, prompt: impl Into<String>) -> Self {
        Self {
            format,
            prompt: prompt.into(),
        }
    }

    pub fn prompt_chars(&self) -> usize {
        self.prompt.chars().count()
    }
}
