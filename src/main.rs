use arff_explorer::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ARFF Explorer - Tabular Text Ingestion and Browsing");
    println!("===================================================");
    println!();
    println!("Parse ARFF-style and loosely delimited datasets into clean tables,");
    println!("cache them by content hash, and browse them page by page.");
    println!();
    println!("USAGE:");
    println!("    arff-explorer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Ingest dataset files and report their parsed structure");
    println!("    query       Page through one dataset, optionally filtered by a search term");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Inspect a batch of files (identical files are parsed once):");
    println!("    arff-explorer inspect data/*.arff");
    println!();
    println!("    # Inspect with more workers and machine-readable output:");
    println!("    arff-explorer inspect weather.arff soil.csv -j 8 --output-format json");
    println!();
    println!("    # Show the second page of fifty rows, filtered:");
    println!("    arff-explorer query weather.arff --page 2 --page-size 50 --search sunny");
    println!();
    println!("    # Get help for specific commands:");
    println!("    arff-explorer inspect --help");
    println!("    arff-explorer query --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    arff-explorer <COMMAND> --help");
}
