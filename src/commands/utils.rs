use crate::output::read_tree;
use crate::tree::{calculate_stats, TreeStats};
use crate::utils::config::SECTOR_TOTAL_KEY;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a hierarchical JSON file
pub fn validate_tree_file(file_path: &Path) -> Result<TreeStats> {
    println!("Validating trees: {}", file_path.display());

    let trees = read_tree(file_path)
        .with_context(|| format!("Invalid hierarchical file: {}", file_path.display()))?;
    let stats = calculate_stats(&trees);

    println!("✓ Valid hierarchical JSON");
    println!("  Countries: {}", stats.countries);
    println!("  Sectors:   {}", stats.sectors);
    println!("  Leaves:    {}", stats.leaves);

    Ok(stats)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Emissions Tree Output Schema");
    println!();

    if show_details {
        println!("Input Structure:");
        println!("  <country>: object             - Keyed by country code (e.g. 'CHN')");
        println!("    <sector>: object            - Keyed by sector name");
        println!("      <sub-sector>: number      - Sub-sector emissions");
        println!("      {}: number       - Sector total (optional, defaults to 0)", SECTOR_TOTAL_KEY);
        println!();
        println!("Output Structure:");
        println!("  <country>: object             - One tree per input country");
        println!("    name: string                - Country code");
        println!("    children: array             - Sector nodes, in input order");
        println!("      name: string              - Sector name");
        println!("      value: number             - Sector total");
        println!("      children: array           - Sub-sector leaves, in input order");
        println!("        name: string            - Sub-sector name");
        println!("        value: number           - Sub-sector emissions");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Emissions Tree v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Converts emissions breakdowns into treemap / sunburst hierarchies.");
}
