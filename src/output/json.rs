//! JSON tree output writer.
//!
//! Writes hierarchical datasets to JSON files with 2-space indentation.

use super::validate_path;
use crate::tree::HierarchicalDataset;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a hierarchical dataset to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `dataset` - Trees to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let trees = build_tree(&raw);
/// write_tree(&trees, "file_hierarchical.json")?;
/// ```
pub fn write_tree(
    dataset: &HierarchicalDataset,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing trees to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, dataset)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Trees written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a hierarchical dataset to an indented JSON string
///
/// **Public** - useful for tests and stdout output
pub fn tree_to_string(dataset: &HierarchicalDataset) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Read a hierarchical dataset back from a JSON file
///
/// **Public** - used by validate and inspect
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_tree(input_path: impl AsRef<Path>) -> Result<HierarchicalDataset, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading trees from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let dataset: HierarchicalDataset = serde_json::from_reader(BufReader::new(file))?;

    debug!("Loaded {} country trees", dataset.len());

    Ok(dataset)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
