//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod format_converter;
pub mod llm_gateway;
pub mod progress;
pub mod result_store;
