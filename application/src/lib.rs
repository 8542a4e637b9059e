//! Application layer for toonbench
//!
//! This crate contains the comparison use case, port definitions and the
//! execution parameters of a run. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ComparisonParams;
pub use ports::{
    format_converter::{ConversionError, FormatConverter},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{NoProgress, ProgressNotifier},
    result_store::{PersistenceError, ResultStore},
};
pub use use_cases::run_comparison::{RunComparisonInput, RunComparisonUseCase};
