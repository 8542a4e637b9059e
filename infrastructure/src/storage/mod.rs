//! Persistence of comparison records.

mod json_store;

pub use json_store::{DEFAULT_RESULTS_FILE, JsonResultStore};
