//! Infrastructure layer for toonbench
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and credential loading.

pub mod config;
pub mod converter;
pub mod credentials;
pub mod dataset;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileComparisonConfig, FileConfig, FileConverterConfig,
    FileLlmConfig, FileOutputConfig, IssueSeverity,
};
pub use converter::{CommandConverter, save_converted};
pub use credentials::{ApiKey, CredentialError, load_api_key};
pub use dataset::{DatasetError, DatasetLoader};
pub use providers::gemini::{GeminiLlmGateway, GeminiSession};
pub use storage::{DEFAULT_RESULTS_FILE, JsonResultStore};
