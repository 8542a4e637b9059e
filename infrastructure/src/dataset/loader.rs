//! Reads and validates the JSON dataset file.

use std::path::{Path, PathBuf};
use thiserror::Error;
use toonbench_domain::{Dataset, DomainError};
use tracing::{debug, warn};

/// Errors while loading the dataset. All are input errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("JSON file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("Cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Loads a dataset file into a validated [`Dataset`]
pub struct DatasetLoader;

impl DatasetLoader {
    pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(DatasetError::NotAFile(path.to_path_buf()));
        }
        if !has_json_extension(path) {
            warn!(
                "{} does not have a .json extension; validating content anyway",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Dataset::parse(source_name(path), content)?;
        debug!(
            "Loaded {} ({} characters)",
            dataset.source_name(),
            dataset.char_count()
        );
        Ok(dataset)
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"{"users":[{"name":"A","age":30}]}"#).unwrap();

        let dataset = DatasetLoader::load(&path).unwrap();
        assert_eq!(dataset.source_name(), "users.json");
        assert_eq!(dataset.char_count(), 33);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetLoader::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetLoader::load(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::NotAFile(_)));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"users\": [").unwrap();

        let err = DatasetLoader::load(&path).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Invalid(DomainError::InvalidDataset { .. })
        ));
        assert!(err.to_string().starts_with("Invalid dataset broken.json"));
    }

    #[test]
    fn test_other_extension_is_accepted_when_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "[1,2,3]").unwrap();
        assert!(DatasetLoader::load(&path).is_ok());
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(has_json_extension(Path::new("DATA.JSON")));
        assert!(!has_json_extension(Path::new("data.toon")));
    }
}
