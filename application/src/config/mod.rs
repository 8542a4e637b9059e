//! Application configuration
//!
//! Parameters the use case needs, independent of where they were loaded from.

mod comparison_params;

pub use comparison_params::ComparisonParams;
