//! Gemini provider
//!
//! Talks to the Generative Language REST API:
//!
//! - `POST {base}/v1beta/models/{model}:generateContent` for completions
//! - `GET {base}/v1beta/models` for the model listing
//!
//! The key is sent in the `x-goog-api-key` header. Every request carries an
//! explicit timeout taken from configuration.

mod gateway;
mod session;
mod types;

#[cfg(test)]
mod test_server;

pub use gateway::GeminiLlmGateway;
pub use session::GeminiSession;
