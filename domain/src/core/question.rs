//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question about the dataset (Value Object)
///
/// The same question text is embedded verbatim in both prompts, so it is
/// captured once and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a question, rejecting empty or whitespace-only text.
    ///
    /// Surrounding whitespace is removed.
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Build a question from several command-line words joined by single spaces.
    ///
    /// Returns `Ok(None)` when there are no words at all, so the caller can
    /// fall back to an interactive prompt.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Option<Self>, DomainError> {
        if words.is_empty() {
            return Ok(None);
        }
        let joined = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        Self::try_new(joined).map(Some)
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("list all names").unwrap();
        assert_eq!(q.content(), "list all names");
    }

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::try_new("  list all names \n").unwrap();
        assert_eq!(q.content(), "list all names");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_err());
        assert!(Question::try_new("   ").is_err());
    }

    #[test]
    fn test_from_words_joins_with_spaces() {
        let words = vec!["list".to_string(), "all".to_string(), "names".to_string()];
        let q = Question::from_words(&words).unwrap().unwrap();
        assert_eq!(q.content(), "list all names");
    }

    #[test]
    fn test_from_words_empty_is_none() {
        let words: Vec<String> = vec![];
        assert!(Question::from_words(&words).unwrap().is_none());
    }

    #[test]
    fn test_from_words_whitespace_is_error() {
        assert!(Question::from_words(&["  ", " "]).is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let q = Question::try_new("list all names").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"list all names\"");
    }
}
