//! Interactive question prompt
//!
//! Used when no question was given on the command line. Reads a single line
//! and blocks until it arrives.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use toonbench_domain::{DomainError, PromptTemplate, Question};

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("failed to read question: {0}")]
    Io(#[from] io::Error),

    #[error("no question provided (input closed)")]
    Closed,

    #[error(transparent)]
    Empty(#[from] DomainError),
}

/// Line-oriented question prompt over any reader/writer pair
pub struct QuestionPrompt<R, W> {
    input: R,
    output: W,
    show_samples: bool,
}

impl QuestionPrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the terminal; the prompt text goes to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> QuestionPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_samples: true,
        }
    }

    /// Set whether sample questions are listed before the prompt
    pub fn with_samples(mut self, show: bool) -> Self {
        self.show_samples = show;
        self
    }

    /// Ask for the question. A blank answer is an error, not a retry.
    pub fn ask(&mut self) -> Result<Question, PromptError> {
        if self.show_samples {
            writeln!(self.output, "{}", "Sample questions:".cyan().bold())?;
            for (i, sample) in PromptTemplate::sample_questions().iter().enumerate() {
                writeln!(self.output, "  {}. {}", i + 1, sample)?;
            }
            writeln!(self.output)?;
        }

        write!(self.output, "{} ", "Question:".bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(Question::try_new(line)?)
    }
}
