//! Comparison domain
//!
//! One run issues a [`QueryRequest`](request::QueryRequest) per
//! [`DataFormat`](format::DataFormat) and combines the two
//! [`QueryResult`](result::QueryResult)s into a
//! [`ComparisonRecord`](record::ComparisonRecord).

pub mod format;
pub mod record;
pub mod request;
pub mod result;
mod serde_secs;
pub mod verdict;
