//! Inspect command implementation.
//!
//! Shows one country's sector breakdown from a hierarchical file,
//! either as a text table or as the flat sector-level JSON view.

use super::models::InspectArgs;
use crate::output::read_tree;
use crate::tree::{
    country_total, exclude_sectors, find_country, flatten, percentage_of, resolve_country_code,
    sort_by_value, CountryTree, HierarchicalDataset,
};
use crate::utils::config::DEFAULT_EXCLUDED_SECTORS;
use anyhow::{Context, Result};
use log::debug;

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed tree file
/// * Country not present in the file
pub fn execute_inspect(args: &InspectArgs) -> Result<()> {
    let trees = read_tree(&args.tree_path)
        .with_context(|| format!("Failed to read trees from {}", args.tree_path.display()))?;

    let tree = select_country(&trees, args)?;

    if args.flat {
        let flat = flatten(&tree);
        println!("{}", serde_json::to_string_pretty(&flat)?);
    } else {
        println!("{}", format_breakdown(&tree));
    }

    Ok(())
}

/// Resolve the requested country and apply the default view
///
/// **Public** - used by execute_inspect
pub fn select_country(trees: &HierarchicalDataset, args: &InspectArgs) -> Result<CountryTree> {
    let tree = find_country(trees, &args.country).with_context(|| {
        format!(
            "Country '{}' (code {}) not found",
            args.country,
            resolve_country_code(&args.country)
        )
    })?;

    let mut tree = if args.include_all {
        tree.clone()
    } else {
        exclude_sectors(tree, DEFAULT_EXCLUDED_SECTORS)
    };
    sort_by_value(&mut tree);

    debug!("{}: {} sectors selected", tree.name, tree.children.len());

    Ok(tree)
}

/// Render a sector table with percentage shares
///
/// **Public** - text output for inspect
pub fn format_breakdown(tree: &CountryTree) -> String {
    let total = country_total(tree);
    let mut output = String::new();

    output.push_str(&format!("Country: {}\n", tree.name));
    output.push_str(&format!("Total:   {:.2}\n\n", total));

    if tree.children.is_empty() {
        output.push_str("No sectors.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<40} {:>20} {:>8} {:>6}\n",
        "Sector", "Value", "Share", "Subs"
    ));
    output.push_str(&format!("{}\n", "-".repeat(77)));

    for sector in &tree.children {
        output.push_str(&format!(
            "{:<40} {:>20.2} {:>7.1}% {:>6}\n",
            sector.name,
            sector.value.as_f64(),
            percentage_of(sector.value.as_f64(), total),
            sector.children.len()
        ));
    }

    output
}
