//! Fatal error classification
//!
//! Every error that ends a run is reported as one line,
//! `error[<kind>]: <message>`, with an exit code per kind.

use crate::prompt::question::PromptError;
use std::fmt;
use std::process::ExitCode;
use thiserror::Error;
use toonbench_application::{ConversionError, GatewayError, PersistenceError};
use toonbench_domain::DomainError;

/// Category of a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential or invalid configuration; raised before any file is read
    Config,
    /// Missing or invalid dataset, or no question
    Input,
    /// The converter failed or produced nothing
    Conversion,
    /// The results file could not be read or rewritten
    Persistence,
    Other,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Config => "ConfigError",
            ErrorKind::Input => "InputError",
            ErrorKind::Conversion => "ConversionError",
            ErrorKind::Persistence => "PersistenceError",
            ErrorKind::Other => "Error",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::Config => 2,
            ErrorKind::Input => 3,
            ErrorKind::Conversion => 4,
            ErrorKind::Persistence => 5,
            ErrorKind::Other => 1,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error that terminates the run
#[derive(Error, Debug)]
#[error("error[{kind}]: {message}")]
pub struct FatalError {
    kind: ErrorKind,
    message: String,
}

impl FatalError {
    pub fn new(kind: ErrorKind, message: impl fmt::Display) -> Self {
        // Keep the report on a single line
        let message = message
            .to_string()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" | ");
        Self { kind, message }
    }

    pub fn config(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn input(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.kind.exit_code())
    }
}

impl From<DomainError> for FatalError {
    fn from(e: DomainError) -> Self {
        let kind = if e.is_input_error() {
            ErrorKind::Input
        } else {
            ErrorKind::Conversion
        };
        Self::new(kind, e)
    }
}

impl From<PromptError> for FatalError {
    fn from(e: PromptError) -> Self {
        Self::input(e)
    }
}

impl From<ConversionError> for FatalError {
    fn from(e: ConversionError) -> Self {
        Self::new(ErrorKind::Conversion, e)
    }
}

impl From<PersistenceError> for FatalError {
    fn from(e: PersistenceError) -> Self {
        Self::new(ErrorKind::Persistence, e)
    }
}

impl From<GatewayError> for FatalError {
    fn from(e: GatewayError) -> Self {
        Self::new(ErrorKind::Other, e)
    }
}
