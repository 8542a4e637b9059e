//! Writes the converted text beside the dataset for later inspection.

use std::path::{Path, PathBuf};
use toonbench_domain::ConvertedDataset;

/// Save `converted` as `<stem>_output.<format>` next to `dataset_path`.
pub fn save_converted(dataset_path: &Path, converted: &ConvertedDataset) -> std::io::Result<PathBuf> {
    let stem = dataset_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let extension = converted.format_name().to_lowercase();
    let target = dataset_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format!("{stem}_output.{extension}"));

    std::fs::write(&target, converted.text())?;
    Ok(target)
}
