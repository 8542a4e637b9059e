//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini models a comparison can run against
//! - [`question::Question`]: a validated question about the dataset
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
