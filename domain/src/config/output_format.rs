//! Output format value object

use serde::{Deserialize, Serialize};

/// How the outcome of a run is printed to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Side-by-side human-readable summary (default)
    #[default]
    Summary,
    /// The comparison record as pretty-printed JSON
    Json,
}
