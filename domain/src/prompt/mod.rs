//! Prompt domain
//!
//! The template both queries of a run are built from.

mod template;

pub use template::PromptTemplate;
