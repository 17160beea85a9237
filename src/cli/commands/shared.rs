//! Shared components for CLI commands
//!
//! This module contains common utilities used across multiple CLI command
//! implementations: logging setup, dataset file loading, progress reporting,
//! and CSV field escaping for report output.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::args::{InspectArgs, QueryArgs};
use crate::{Error, Result};

/// Set up logging based on inspect command arguments
pub fn setup_logging(args: &InspectArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("arff_explorer={}", log_level)));

    if args.quiet {
        // Compact output for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard output with timing
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Set up logging based on query command arguments
pub fn setup_query_logging(args: &QueryArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("arff_explorer={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read a dataset file into memory
///
/// Datasets are parsed from full in-memory text, so the whole file is read
/// up front. Binary files fail here with a clear message rather than deep
/// inside the parser.
pub fn read_dataset_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Create a progress bar with standard styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-")
    );
    pb.set_message(message.to_string());
    pb
}

/// Escape a field for CSV report output
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_dataset_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.arff");
        fs::write(&path, "@relation t\n@data\n1\n").unwrap();

        let text = read_dataset_file(&path).unwrap();
        assert!(text.starts_with("@relation"));
    }

    #[test]
    fn test_read_missing_file_reports_the_path() {
        let error = read_dataset_file(Path::new("/nonexistent/data.arff")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/data.arff"));
    }

    #[test]
    fn test_create_progress_bar() {
        let pb = create_progress_bar(10, "Testing");
        assert_eq!(pb.length(), Some(10));
        pb.finish_and_clear();
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
