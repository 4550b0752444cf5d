//! Summary statistics over hierarchical datasets.

use super::node::{CountryTree, HierarchicalDataset};

/// Node counts for a hierarchical dataset
///
/// **Public** - returned from calculate_stats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of country roots
    pub countries: usize,

    /// Number of sector nodes across all countries
    pub sectors: usize,

    /// Number of sub-sector leaves across all sectors
    pub leaves: usize,
}

impl TreeStats {
    /// Format as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} countries, {} sectors, {} leaves",
            self.countries, self.sectors, self.leaves
        )
    }
}

/// Count countries, sectors and leaves
pub fn calculate_stats(dataset: &HierarchicalDataset) -> TreeStats {
    dataset.values().fold(
        TreeStats {
            countries: dataset.len(),
            ..Default::default()
        },
        |mut stats, tree| {
            stats.sectors += tree.children.len();
            stats.leaves += tree.children.iter().map(|s| s.children.len()).sum::<usize>();
            stats
        },
    )
}

/// Sum of sector values for a country
pub fn country_total(tree: &CountryTree) -> f64 {
    tree.children.iter().map(|s| s.value.as_f64()).sum()
}

/// Share of `value` in `total`, as a percentage (0 when total is 0)
pub fn percentage_of(value: f64, total: f64) -> f64 {
    if total != 0.0 {
        (value / total) * 100.0
    } else {
        0.0
    }
}
