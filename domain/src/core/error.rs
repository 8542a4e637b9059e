//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid dataset {source_name}: {reason}")]
    InvalidDataset { source_name: String, reason: String },

    #[error("Converter produced no {format_name} output")]
    EmptyConversion { format_name: String },
}

impl DomainError {
    /// Check if this error was caused by the input dataset or question
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuestion(_) | DomainError::InvalidDataset { .. }
        )
    }
}
