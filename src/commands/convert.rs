//! Convert command implementation.
//!
//! The convert command:
//! 1. Loads the raw emissions JSON
//! 2. Builds the per-country trees
//! 3. Writes the hierarchical JSON

use super::models::ConvertArgs;
use crate::output::write_tree;
use crate::parser::load_dataset;
use crate::tree::{build_tree, calculate_stats, exclude_sectors, sort_by_value, HierarchicalDataset};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Convert command arguments
///
/// # Returns
/// The trees that were written, so callers can inspect them further
///
/// # Errors
/// * Missing or malformed input file
/// * Input with the wrong shape (`TypeMismatch`)
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = ConvertArgs {
///     input_path: PathBuf::from("subsector_breakdown.json"),
///     output_path: PathBuf::from("file_hierarchical.json"),
///     ..Default::default()
/// };
///
/// execute_convert(&args)?;
/// ```
pub fn execute_convert(args: &ConvertArgs) -> Result<HierarchicalDataset> {
    let start_time = Instant::now();

    info!("Input: {}", args.input_path.display());
    info!("Output: {}", args.output_path.display());

    // Step 1: Load raw data
    let raw = load_dataset(&args.input_path).with_context(|| {
        format!(
            "Failed to load raw emissions data from {}",
            args.input_path.display()
        )
    })?;
    println!("Raw data loaded.");
    debug!("Loaded {} countries", raw.len());

    // Step 2: Build trees
    let mut trees = build_tree(&raw);
    if args.reshapes_output() {
        trees = reshape(trees, args);
    }
    println!("Hierarchical tree constructed.");

    let stats = calculate_stats(&trees);
    info!("Tree contents: {}", stats.summary());

    // Step 3: Write output
    write_tree(&trees, &args.output_path).with_context(|| {
        format!(
            "Failed to write hierarchical data to {}",
            args.output_path.display()
        )
    })?;
    println!("Transformed data written to {}.", args.output_path.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("TREE SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Countries: {}", stats.countries);
        println!("Sectors:   {}", stats.sectors);
        println!("Leaves:    {}", stats.leaves);
        println!("{}", "=".repeat(60));
    }

    info!(
        "Convert completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(trees)
}

/// Apply --exclude and --sort to every country
///
/// **Private** - internal helper for execute_convert
fn reshape(trees: HierarchicalDataset, args: &ConvertArgs) -> HierarchicalDataset {
    trees
        .into_iter()
        .map(|(country, tree)| {
            let mut tree = if args.excluded_sectors.is_empty() {
                tree
            } else {
                exclude_sectors(&tree, args.excluded_sectors.as_slice())
            };
            if args.sort_by_value {
                sort_by_value(&mut tree);
            }
            (country, tree)
        })
        .collect()
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input_path.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_path.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    // Output must never overwrite the input, however either path is spelled
    if same_file(&args.input_path, &args.output_path) {
        anyhow::bail!(
            "Input and output paths must differ: {}",
            args.input_path.display()
        );
    }

    if args.excluded_sectors.iter().any(|s| s.trim().is_empty()) {
        anyhow::bail!("Excluded sector names cannot be empty");
    }

    Ok(())
}

/// Whether two paths name the same file once `.`/`..` and symlinks are resolved
fn same_file(a: &Path, b: &Path) -> bool {
    resolve_path(a) == resolve_path(b)
}

/// Absolute form of `path`; the file itself need not exist yet
///
/// **Private** - falls back to dropping `.` components when nothing resolves
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_defaults() {
        assert!(validate_args(&ConvertArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ConvertArgs {
            input_path: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = ConvertArgs {
            output_path: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_paths() {
        let args = ConvertArgs {
            input_path: PathBuf::from("data.json"),
            output_path: PathBuf::from("data.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_path_spelled_differently() {
        let args = ConvertArgs {
            input_path: PathBuf::from("data.json"),
            output_path: PathBuf::from("./data.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_resolve_path_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().canonicalize().unwrap();

        assert_eq!(
            resolve_path(&temp_dir.path().join("./new.json")),
            dir.join("new.json")
        );
        assert_eq!(
            resolve_path(Path::new("no/such/dir/./x.json")),
            PathBuf::from("no/such/dir/x.json")
        );
    }

    #[test]
    fn test_validate_args_blank_exclusion() {
        let args = ConvertArgs {
            excluded_sectors: vec!["  ".to_string()],
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }
}
