//! Converter adapter that runs the conversion tool as a child process.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;
use toonbench_application::{ConversionError, FormatConverter};
use toonbench_domain::ConvertedDataset;
use tracing::{debug, info};

/// Maximum stderr kept in an error message (4 KB)
const MAX_STDERR_SIZE: usize = 4 * 1024;

/// Runs `program args... <dataset path>` and captures stdout.
///
/// No stdin is fed to the child; a non-zero exit or empty stdout is a
/// conversion failure.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
    format_name: String,
}

impl CommandConverter {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        format_name: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            format_name: format_name.into(),
        }
    }

    /// Command line for logs, e.g. `npx @toon-format/cli data.json`
    pub fn describe(&self, path: &Path) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(path.display().to_string());
        parts.join(" ")
    }
}

impl FormatConverter for CommandConverter {
    fn format_name(&self) -> &str {
        &self.format_name
    }

    fn convert(&self, path: &Path) -> Result<ConvertedDataset, ConversionError> {
        info!("Converting {} to {}", path.display(), self.format_name);
        debug!("Running: {}", self.describe(path));

        let start = Instant::now();
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ConversionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!(
            "Converter finished in {} ms with {}",
            start.elapsed().as_millis(),
            output.status
        );

        if !output.status.success() {
            let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.len() > MAX_STDERR_SIZE {
                let mut end = MAX_STDERR_SIZE;
                while !stderr.is_char_boundary(end) {
                    end -= 1;
                }
                stderr.truncate(end);
                stderr.push_str("... (truncated)");
            }
            if stderr.is_empty() {
                stderr = "(no stderr output)".to_string();
            }
            return Err(ConversionError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| ConversionError::InvalidUtf8)?;

        ConvertedDataset::try_new(&self.format_name, text).map_err(|_| {
            ConversionError::EmptyOutput {
                format_name: self.format_name.clone(),
            }
        })
    }
}
