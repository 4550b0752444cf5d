//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod inspect;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use convert::{execute_convert, validate_args};
pub use inspect::execute_inspect;
pub use models::{ConvertArgs, InspectArgs};
pub use utils::{display_schema, display_version, validate_tree_file};
