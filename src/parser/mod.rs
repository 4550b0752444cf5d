//! Raw dataset parsing and schema definitions.
//!
//! This module handles:
//! - Reading the raw emissions JSON from disk
//! - Checking its shape level by level
//! - Defining the typed input records

pub mod dataset;
pub mod schema;

// Re-export main types
pub use dataset::{load_dataset, parse_dataset};
pub use schema::{Emission, RawDataset, SectorMap, SubSectorMap};
