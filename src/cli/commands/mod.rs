//! Command implementations for the ARFF explorer CLI
//!
//! This module contains the command execution logic, progress reporting, and
//! report formatting for the CLI interface. Each command is implemented in
//! its own module.

pub mod inspect;
pub mod query;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the ARFF explorer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `inspect`: batch ingestion with per-file structure reports
/// - `query`: paginated, searchable view over a single dataset
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args).await,
        Some(Commands::Query(query_args)) => query::run_query(query_args).await,
        None => Ok(()),
    }
}
