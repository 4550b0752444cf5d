//! Hierarchical tree construction and views.
//!
//! This module transforms parsed emissions data into:
//! - Per-country trees (for treemap / sunburst charts)
//! - Filtered, sorted and flattened views of those trees
//! - Node count statistics

pub mod builder;
pub mod node;
pub mod stats;
pub mod view;

// Re-export main types and functions
pub use builder::{build_country, build_tree, build_tree_from_value};
pub use node::{CountryTree, FlatTree, HierarchicalDataset, LeafNode, SectorNode};
pub use stats::{calculate_stats, country_total, percentage_of, TreeStats};
pub use view::{exclude_sectors, find_country, flatten, resolve_country_code, sort_by_value};
