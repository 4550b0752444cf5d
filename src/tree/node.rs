//! Output JSON schema for hierarchical emissions data.
//!
//! This is the shape chart libraries consume directly:
//! a root per country, sector nodes with a total, and leaf sub-sectors.

use crate::parser::Emission;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Country code -> tree, in input order
pub type HierarchicalDataset = IndexMap<String, CountryTree>;

/// Root node for a single country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTree {
    /// Country code (e.g. "CHN")
    pub name: String,

    /// One node per sector
    pub children: Vec<SectorNode>,
}

/// A sector with its precomputed total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorNode {
    /// Sector name (e.g. "fossil-fuel-operations")
    pub name: String,

    /// Sector total taken from `sectorTotal`
    pub value: Emission,

    /// Sub-sector leaves
    pub children: Vec<LeafNode>,
}

/// A sub-sector value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub name: String,
    pub value: Emission,
}

impl LeafNode {
    pub fn new(name: impl Into<String>, value: impl Into<Emission>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Sector-level view of a country (no sub-sectors)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatTree {
    pub name: String,
    pub children: Vec<LeafNode>,
}
