//! Command-line argument definitions for the ARFF explorer
//!
//! This module defines the complete CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::services::table_query::PageRequest;
use crate::constants::{DEFAULT_MAX_CONCURRENT_FILES, DEFAULT_PAGE_SIZE};
use crate::{Error, Result};

/// CLI arguments for the ARFF dataset explorer
///
/// Ingests ARFF-style and loosely delimited text datasets into clean
/// rectangular tables, caches them by content hash, and serves paginated,
/// searchable views over the parsed rows.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "arff-explorer",
    version,
    about = "Ingest messy ARFF/CSV datasets and browse them as clean tables",
    long_about = "Parses ARFF-style headers and loosely delimited data sections into rectangular \
                  in-memory tables, tolerating malformed rows, mismatched attribute declarations, \
                  and files with no recognizable structure at all. Parsed datasets are cached by \
                  content hash so identical uploads are never parsed twice, and every dataset can \
                  be paged through and searched from the command line."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ARFF explorer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest dataset files and report their parsed structure (default workflow)
    Inspect(InspectArgs),
    /// Page through one dataset, optionally filtered by a search term
    Query(QueryArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Dataset files to ingest
    #[arg(
        value_name = "FILES",
        required = true,
        help = "Dataset files to ingest (ARFF or delimited text)",
        long_help = "One or more dataset files to parse. Each file is ingested independently; \
                     byte-identical files are parsed once and served from the cache afterwards, \
                     which the report makes visible."
    )]
    pub files: Vec<PathBuf>,

    /// Number of files ingested concurrently
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_CONCURRENT_FILES,
        help = "Number of files ingested concurrently"
    )]
    pub workers: usize,

    /// Number of data rows echoed per file in the human-readable report
    #[arg(
        long = "preview",
        value_name = "ROWS",
        default_value_t = 5,
        help = "Data rows shown per file in the human-readable report"
    )]
    pub preview: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress and non-error output
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress reporting and non-error log output",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the inspection report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the inspection report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Dataset file to ingest and page through
    #[arg(
        value_name = "FILE",
        help = "Dataset file to ingest and page through"
    )]
    pub file: PathBuf,

    /// 1-based page number to display
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "1-based page number to display"
    )]
    pub page: usize,

    /// Number of rows per page
    #[arg(
        long = "page-size",
        value_name = "ROWS",
        default_value_t = DEFAULT_PAGE_SIZE,
        help = "Number of rows per page"
    )]
    pub page_size: usize,

    /// Case-insensitive substring filter applied across every cell
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        help = "Only show rows where some cell contains this text (case-insensitive)"
    )]
    pub search: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress non-error log output",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the page
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the page"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output to the terminal
    Human,
    /// JSON format for programmatic use
    Json,
    /// CSV format for spreadsheets
    Csv,
}

impl InspectArgs {
    /// Validate arguments before ingestion starts
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::configuration(
                "At least one dataset file is required".to_string(),
            ));
        }

        for file in &self.files {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    file.display()
                )));
            }
            if !file.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    file.display()
                )));
            }
        }

        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }
        if self.workers > 100 {
            return Err(Error::configuration(
                "Number of workers cannot exceed 100".to_string(),
            ));
        }

        Ok(())
    }

    /// Get effective log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether a progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.files.len() > 1
    }
}

impl QueryArgs {
    /// Validate arguments before the dataset is loaded
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.file.display()
            )));
        }
        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.file.display()
            )));
        }

        if self.page == 0 {
            return Err(Error::configuration(
                "Page numbers start at 1".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(Error::configuration(
                "Page size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Get effective log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the page request this invocation describes
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
            search: self.search.clone(),
        }
    }
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            workers: DEFAULT_MAX_CONCURRENT_FILES,
            preview: 5,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_dataset(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "@relation t\n@data\n1,2\n").unwrap();
        path
    }

    #[test]
    fn test_inspect_args_accept_existing_files() {
        let dir = TempDir::new().unwrap();
        let args = InspectArgs {
            files: vec![temp_dataset(&dir, "a.arff"), temp_dataset(&dir, "b.arff")],
            ..Default::default()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_inspect_args_reject_missing_file() {
        let args = InspectArgs {
            files: vec![PathBuf::from("/nonexistent/data.arff")],
            ..Default::default()
        };
        let error = args.validate().unwrap_err();
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn test_inspect_args_reject_directory_input() {
        let dir = TempDir::new().unwrap();
        let args = InspectArgs {
            files: vec![dir.path().to_path_buf()],
            ..Default::default()
        };
        let error = args.validate().unwrap_err();
        assert!(error.to_string().contains("not a file"));
    }

    #[test]
    fn test_inspect_args_reject_bad_worker_counts() {
        let dir = TempDir::new().unwrap();
        let files = vec![temp_dataset(&dir, "a.arff")];

        let zero = InspectArgs {
            files: files.clone(),
            workers: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let huge = InspectArgs {
            files,
            workers: 101,
            ..Default::default()
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_inspect_args_require_files() {
        let args = InspectArgs::default();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let mut args = InspectArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_progress_shown_only_for_batches() {
        let dir = TempDir::new().unwrap();
        let one = temp_dataset(&dir, "a.arff");
        let two = temp_dataset(&dir, "b.arff");

        let single = InspectArgs {
            files: vec![one.clone()],
            ..Default::default()
        };
        assert!(!single.show_progress());

        let batch = InspectArgs {
            files: vec![one.clone(), two.clone()],
            ..Default::default()
        };
        assert!(batch.show_progress());

        let quiet = InspectArgs {
            files: vec![one, two],
            quiet: true,
            ..Default::default()
        };
        assert!(!quiet.show_progress());
    }

    #[test]
    fn test_query_args_validation() {
        let dir = TempDir::new().unwrap();
        let file = temp_dataset(&dir, "a.arff");

        let ok = QueryArgs {
            file: file.clone(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let zero_page = QueryArgs {
            file: file.clone(),
            page: 0,
            ..Default::default()
        };
        assert!(zero_page.validate().is_err());

        let zero_size = QueryArgs {
            file,
            page_size: 0,
            ..Default::default()
        };
        assert!(zero_size.validate().is_err());

        let missing = QueryArgs {
            file: PathBuf::from("/nonexistent/data.arff"),
            ..Default::default()
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_query_args_build_a_page_request() {
        let args = QueryArgs {
            page: 3,
            page_size: 50,
            search: Some("rain".to_string()),
            ..Default::default()
        };
        let request = args.page_request();
        assert_eq!(request.page, 3);
        assert_eq!(request.page_size, 50);
        assert_eq!(request.search.as_deref(), Some("rain"));
    }

    #[test]
    fn test_cli_parses_inspect_invocation() {
        let args = Args::try_parse_from([
            "arff-explorer",
            "inspect",
            "data.arff",
            "more.csv",
            "-j",
            "2",
            "--output-format",
            "json",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Inspect(inspect)) => {
                assert_eq!(inspect.files.len(), 2);
                assert_eq!(inspect.workers, 2);
                assert_eq!(inspect.output_format, OutputFormat::Json);
            }
            other => panic!("expected inspect command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_query_invocation() {
        let args = Args::try_parse_from([
            "arff-explorer",
            "query",
            "data.arff",
            "--page",
            "2",
            "--page-size",
            "10",
            "--search",
            "sunny",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Query(query)) => {
                assert_eq!(query.page, 2);
                assert_eq!(query.page_size, 10);
                assert_eq!(query.search.as_deref(), Some("sunny"));
            }
            other => panic!("expected query command, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["arff-explorer", "inspect", "data.arff", "-q", "-v"]);
        assert!(result.is_err());
    }
}
