//! Dataset entities

use crate::core::error::DomainError;

/// The raw JSON document under test.
///
/// Construction validates that the content is syntactically valid JSON; the
/// text itself is kept byte-for-byte so the JSON prompt embeds exactly what
/// is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    source_name: String,
    content: String,
}

impl Dataset {
    /// Parse and validate a JSON document.
    pub fn parse(
        source_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let source_name = source_name.into();
        let content = content.into();

        if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
            return Err(DomainError::InvalidDataset {
                source_name,
                reason: e.to_string(),
            });
        }

        Ok(Self {
            source_name,
            content,
        })
    }

    /// File name the dataset was loaded from (no directory components)
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Size in characters, as reported in the dataset statistics
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// The dataset re-encoded by the external converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDataset {
    format_name: String,
    text: String,
}

impl ConvertedDataset {
    /// Wrap converter output, rejecting empty or whitespace-only text.
    pub fn try_new(
        format_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let format_name = format_name.into();
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyConversion { format_name });
        }
        Ok(Self { format_name, text })
    }

    /// Display name of the notation, e.g. `TOON`
    pub fn format_name(&self) -> &str {
        &self.format_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Percentage of characters the converted text saves relative to the JSON text.
///
/// Negative when the converted text is larger.
pub fn percent_saved(json_chars: usize, alternative_chars: usize) -> f64 {
    if json_chars == 0 {
        return 0.0;
    }
    (json_chars as f64 - alternative_chars as f64) / json_chars as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object() {
        let ds = Dataset::parse("data.json", r#"{"users":[{"name":"A","age":30}]}"#).unwrap();
        assert_eq!(ds.source_name(), "data.json");
        assert_eq!(ds.content(), r#"{"users":[{"name":"A","age":30}]}"#);
    }

    #[test]
    fn test_parse_accepts_scalars_and_arrays() {
        assert!(Dataset::parse("a.json", "42").is_ok());
        assert!(Dataset::parse("b.json", "[1, 2, 3]").is_ok());
        assert!(Dataset::parse("c.json", "\"text\"").is_ok());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = Dataset::parse("bad.json", "{not json").unwrap_err();
        match err {
            DomainError::InvalidDataset { source_name, .. } => {
                assert_eq!(source_name, "bad.json")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_file() {
        assert!(Dataset::parse("empty.json", "").is_err());
    }

    #[test]
    fn test_converted_rejects_blank_output() {
        assert!(ConvertedDataset::try_new("TOON", "").is_err());
        assert!(ConvertedDataset::try_new("TOON", " \n\t").is_err());
    }

    #[test]
    fn test_percent_saved() {
        let ds = Dataset::parse("d.json", r#"{"a":1,"b":2}"#).unwrap(); // 13 chars
        let converted = ConvertedDataset::try_new("TOON", "a: 1\nb: 2\n").unwrap(); // 10 chars
        let saved = percent_saved(ds.char_count(), converted.char_count());
        assert!((saved - 23.0769).abs() < 0.01);
    }

    #[test]
    fn test_percent_saved_edge_cases() {
        assert_eq!(percent_saved(0, 10), 0.0);
        assert_eq!(percent_saved(200, 50), 75.0);
        assert_eq!(percent_saved(100, 150), -50.0);
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        let converted = ConvertedDataset::try_new("TOON", "名前: A").unwrap();
        assert_eq!(converted.char_count(), 5);
    }
}
