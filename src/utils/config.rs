//! Configuration and constants for the CLI.

/// Reserved sub-sector key holding a sector's aggregate emissions
pub const SECTOR_TOTAL_KEY: &str = "sectorTotal";

/// Sector value used when `sectorTotal` is absent
pub const DEFAULT_SECTOR_TOTAL: i64 = 0;

/// Default raw emissions file (country -> sector -> sub-sector)
pub const DEFAULT_INPUT_FILENAME: &str = "subsector_breakdown.json";

/// Default hierarchical output file
pub const DEFAULT_OUTPUT_FILENAME: &str = "file_hierarchical.json";

/// Environment overrides for the file options
pub const INPUT_ENV_VAR: &str = "EMISSIONS_TREE_INPUT";
pub const OUTPUT_ENV_VAR: &str = "EMISSIONS_TREE_OUTPUT";

// Aggregate rows that double count every other sector; hidden from views unless asked for
pub const DEFAULT_EXCLUDED_SECTORS: &[&str] = &["Total excluding LUCF", "Total including LUCF"];

/// Root label of the sector-level (flat) view
pub const FLAT_ROOT_NAME: &str = "Sectors";

/// Full country names accepted in place of their codes (matched case-insensitively)
pub const COUNTRY_CODE_ALIASES: &[(&str, &str)] = &[
    ("China", "CHN"),
    ("United States", "USA"),
    ("India", "IND"),
    ("Brazil", "BRA"),
    ("Russia", "RUS"),
];
