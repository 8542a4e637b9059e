//! LLM provider adapters
//!
//! Each provider implements the [`LlmGateway`](toonbench_application::LlmGateway)
//! port. Only Gemini is wired in.

pub mod gemini;
