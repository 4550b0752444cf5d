use crate::utils::config::{DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_FILENAME};
use std::path::PathBuf;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Raw emissions JSON (country -> sector -> sub-sector)
    pub input_path: PathBuf,

    /// Destination for the hierarchical JSON
    pub output_path: PathBuf,

    /// Order sectors by value, largest first
    pub sort_by_value: bool,

    /// Sector names to drop from every country
    pub excluded_sectors: Vec<String>,

    /// Print node counts to stdout after writing
    pub print_summary: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILENAME),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            sort_by_value: false,
            excluded_sectors: Vec::new(),
            print_summary: false,
        }
    }
}

impl ConvertArgs {
    /// Whether any post-build view shaping was requested
    pub fn reshapes_output(&self) -> bool {
        self.sort_by_value || !self.excluded_sectors.is_empty()
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Hierarchical JSON produced by convert
    pub tree_path: PathBuf,

    /// Country code or full name
    pub country: String,

    /// Emit the sector-level view as JSON instead of a text table
    pub flat: bool,

    /// Keep aggregate sectors that are hidden by default
    pub include_all: bool,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            tree_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            country: String::new(),
            flat: false,
            include_all: false,
        }
    }
}
