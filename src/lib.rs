//! Emissions Tree
//!
//! Converts country -> sector -> sub-sector emissions breakdowns
//! into per-country hierarchies for treemap and sunburst charts.
//!
//! This crate provides the core implementation for the
//! `emissions-tree` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install emissions-tree
//! emissions-tree convert --input subsector_breakdown.json --output file_hierarchical.json
//! ```
//!
//! As a library, parse untyped JSON and build the trees:
//!
//! ```ignore
//! let raw = emissions_tree::parser::parse_dataset(&document)?;
//! let trees = emissions_tree::tree::build_tree(&raw);
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod tree;
pub mod utils;
