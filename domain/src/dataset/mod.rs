//! Dataset domain
//!
//! The document under test in both of its serializations.

mod entities;

pub use entities::{ConvertedDataset, Dataset, percent_saved};
