//! Format conversion through an external command-line tool.

mod command;
mod snapshot;

pub use command::CommandConverter;
pub use snapshot::save_converted;
