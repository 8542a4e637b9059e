//! Configuration file loading for toonbench
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOONBENCH_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./toonbench.toml` or `./.toonbench.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/toonbench/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileComparisonConfig, FileConfig, FileConverterConfig, FileLlmConfig,
    FileOutputConfig, IssueSeverity,
};
pub use loader::ConfigLoader;
