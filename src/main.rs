//! Emissions Tree CLI
//!
//! Turns raw emissions breakdowns into hierarchical JSON for charts.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use emissions_tree::commands::{
    display_schema, display_version, execute_convert, execute_inspect, validate_args,
    validate_tree_file, ConvertArgs, InspectArgs,
};
use emissions_tree::utils::config::{
    DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_FILENAME, INPUT_ENV_VAR, OUTPUT_ENV_VAR,
};
use env_logger::Env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Emissions Tree - hierarchical emissions data for treemaps
#[derive(Parser, Debug)]
#[command(name = "emissions-tree")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to convert)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Convert options used when no subcommand is given
    #[command(flatten)]
    convert: ConvertOptions,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options for the convert command
#[derive(Args, Debug)]
struct ConvertOptions {
    /// Raw emissions JSON file
    #[arg(short, long, env = INPUT_ENV_VAR, default_value = DEFAULT_INPUT_FILENAME)]
    input: PathBuf,

    /// Hierarchical JSON output file
    #[arg(short, long, env = OUTPUT_ENV_VAR, default_value = DEFAULT_OUTPUT_FILENAME)]
    output: PathBuf,

    /// Order sectors by value, largest first
    #[arg(long)]
    sort: bool,

    /// Drop a sector from every country (repeatable)
    #[arg(long = "exclude", value_name = "SECTOR")]
    excluded: Vec<String>,

    /// Print node counts to stdout
    #[arg(long)]
    summary: bool,
}

impl From<ConvertOptions> for ConvertArgs {
    fn from(opts: ConvertOptions) -> Self {
        Self {
            input_path: opts.input,
            output_path: opts.output,
            sort_by_value: opts.sort,
            excluded_sectors: opts.excluded,
            print_summary: opts.summary,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a raw emissions file into hierarchical JSON
    Convert(ConvertOptions),

    /// Show one country's sector breakdown
    Inspect {
        /// Hierarchical JSON file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILENAME)]
        file: PathBuf,

        /// Country code or full name (e.g. CHN, China)
        #[arg(short, long)]
        country: String,

        /// Print the sector-level view as JSON
        #[arg(long)]
        flat: bool,

        /// Keep aggregate "Total ... LUCF" sectors
        #[arg(long)]
        all: bool,
    },

    /// Validate a hierarchical JSON file
    Validate {
        /// Path to hierarchical JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

/// Top-level convert options that may not be combined with a subcommand
const TOP_LEVEL_CONVERT_IDS: [&str; 5] = ["input", "output", "sort", "excluded", "summary"];

/// Parse arguments, rejecting top-level convert options given alongside a subcommand
///
/// Global flags such as `--verbose` stay valid on either side of the subcommand.
fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Cli::command();
    let matches = command.try_get_matches_from_mut(args)?;

    if let Some((name, _)) = matches.subcommand() {
        let misplaced = TOP_LEVEL_CONVERT_IDS
            .iter()
            .find(|id| matches.value_source(id) == Some(ValueSource::CommandLine));

        if let Some(id) = misplaced {
            return Err(command.error(
                ErrorKind::ArgumentConflict,
                format!("'--{}' cannot be used with the '{}' subcommand", id, name),
            ));
        }
    }

    Cli::from_arg_matches(&matches)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = parse_cli_from(std::env::args_os()).unwrap_or_else(|e| e.exit());

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // No subcommand: convert using the top-level options
    let command = cli.command.unwrap_or(Commands::Convert(cli.convert));

    match command {
        Commands::Convert(opts) => {
            let args = ConvertArgs::from(opts);
            validate_args(&args)?;
            execute_convert(&args)?;
        }

        Commands::Inspect {
            file,
            country,
            flat,
            all,
        } => {
            let args = InspectArgs {
                tree_path: file,
                country,
                flat,
                include_all: all,
            };
            execute_inspect(&args)?;
        }

        Commands::Validate { file } => {
            validate_tree_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
