//! Data format value object

use serde::{Deserialize, Serialize};

/// Which serialization of the dataset a query embeds.
///
/// The declaration order is the dispatch order: JSON is always queried
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    Alternative,
}

impl DataFormat {
    /// Both formats in dispatch order
    pub const ALL: [DataFormat; 2] = [DataFormat::Json, DataFormat::Alternative];

    /// Stable label used in the results file
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Alternative => "alternative",
        }
    }

    /// Human-facing name; the alternative format is named by the converter.
    pub fn display_name<'a>(&self, alternative_name: &'a str) -> &'a str {
        match self {
            DataFormat::Json => "JSON",
            DataFormat::Alternative => alternative_name,
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_order_is_json_first() {
        assert_eq!(DataFormat::ALL, [DataFormat::Json, DataFormat::Alternative]);
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&DataFormat::Alternative).unwrap(),
            "\"alternative\""
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(DataFormat::Json.display_name("TOON"), "JSON");
        assert_eq!(DataFormat::Alternative.display_name("TOON"), "TOON");
    }
}
