//! Presentation layer for toonbench
//!
//! This crate contains the CLI definition, the interactive question prompt,
//! output formatters, progress reporters and fatal error reporting.

pub mod cli;
pub mod error;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use error::{ErrorKind, FatalError};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use prompt::question::{PromptError, QuestionPrompt};
