//! LLM Gateway port
//!
//! Defines the interface for communicating with the LLM provider.

use async_trait::async_trait;
use thiserror::Error;
use toonbench_domain::Model;

/// Errors that can occur during LLM gateway operations
///
/// These never abort a comparison run; the message is stored in the
/// query result instead.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the LLM
/// provider. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new, empty session with the specified model
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Get available models
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

/// An LLM session
///
/// Sessions carry no conversation history: every `send` is a standalone
/// completion of the given prompt.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a prompt and get the response text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
