//! Dataset loading from disk.

mod loader;

pub use loader::{DatasetError, DatasetLoader};
