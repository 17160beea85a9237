//! Inspect command implementation
//!
//! Ingests one or more dataset files through a shared explorer and reports
//! the parsed structure of each: relation name, resolved columns, row count,
//! content hash, and how the parse was obtained. Files are ingested
//! concurrently with a bounded worker count, and byte-identical files show
//! up as cache hits rather than repeat parses.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use futures::StreamExt;
use serde_json::json;
use tracing::{debug, info, warn};

use super::shared::{create_progress_bar, csv_escape, read_dataset_file, setup_logging};
use crate::app::services::explorer::{DatasetExplorer, IngestReceipt};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::config::ExplorerConfig;
use crate::{Error, Result};

/// Outcome of ingesting a single file
#[derive(Debug)]
pub struct FileReport {
    /// Path the dataset was read from
    pub path: PathBuf,
    /// Ingest receipt, or the error that stopped it
    pub outcome: Result<IngestReceipt>,
}

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting dataset inspection");
    debug!("Inspect arguments: {:?}", args);

    args.validate()?;

    let config = ExplorerConfig::default().with_max_concurrent_files(args.workers);
    let explorer = Arc::new(DatasetExplorer::new(config)?);

    let progress = if args.show_progress() {
        Some(create_progress_bar(
            args.files.len() as u64,
            "Ingesting datasets",
        ))
    } else {
        None
    };

    // Bounded concurrent ingestion; results are re-ordered to match the
    // command line so reports are stable across runs.
    let mut indexed = futures::stream::iter(args.files.iter().cloned().enumerate())
        .map(|(index, path)| {
            let explorer = Arc::clone(&explorer);
            let progress = progress.clone();
            async move {
                let outcome = match read_dataset_file(&path) {
                    Ok(text) => explorer.ingest(&text).await,
                    Err(error) => Err(error),
                };
                if let Some(bar) = &progress {
                    bar.inc(1);
                }
                (index, FileReport { path, outcome })
            }
        })
        .buffer_unordered(args.workers)
        .collect::<Vec<_>>()
        .await;

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    indexed.sort_by_key(|(index, _)| *index);
    let reports: Vec<FileReport> = indexed.into_iter().map(|(_, report)| report).collect();

    match args.output_format {
        OutputFormat::Human => {
            print_human_report(&args, &reports, &explorer, start_time.elapsed())
        }
        OutputFormat::Json => print_json_report(&reports, &explorer)?,
        OutputFormat::Csv => print_csv_report(&reports),
    }

    let failures = reports.iter().filter(|r| r.outcome.is_err()).count();
    if failures > 0 {
        warn!("{} of {} files failed to ingest", failures, reports.len());
    }
    if failures == reports.len() {
        return Err(Error::unparseable(format!(
            "all {} input files failed to ingest",
            failures
        )));
    }

    Ok(())
}

fn print_human_report(
    args: &InspectArgs,
    reports: &[FileReport],
    explorer: &DatasetExplorer,
    elapsed: Duration,
) {
    println!();
    println!("{}", "📊 Dataset Inspection Report".bright_green().bold());
    println!("============================");
    println!();

    for report in reports {
        match &report.outcome {
            Ok(receipt) => {
                println!(
                    "✅ {}",
                    report.path.display().to_string().bright_white().bold()
                );
                println!("   Relation: {}", receipt.relation);
                println!(
                    "   Columns ({}): {}",
                    receipt.total_columns,
                    receipt.columns.join(", ")
                );
                println!("   Rows: {}", receipt.total_rows);
                println!("   Content hash: {}", receipt.content_hash.bright_cyan());
                if receipt.from_cache {
                    println!("   Source: cache (identical content already ingested)");
                } else if let Some(stats) = &receipt.stats {
                    println!("   Source: parsed via {}", stats.parser_label());
                    if stats.rows_skipped > 0 {
                        println!("   Rows skipped as malformed: {}", stats.rows_skipped);
                    }
                    if stats.header_mismatch {
                        println!(
                            "   Note: attribute declarations did not line up with the data; generic column names assigned"
                        );
                    }
                    if stats.values_sanitized > 0 {
                        println!("   Non-finite values nulled: {}", stats.values_sanitized);
                    }
                }
                print_preview(receipt, args.preview);
            }
            Err(error) => {
                println!(
                    "❌ {}",
                    report.path.display().to_string().bright_red().bold()
                );
                println!("   {}", error);
            }
        }
        println!();
    }

    let succeeded = reports.iter().filter(|r| r.outcome.is_ok()).count();
    let failed = reports.len() - succeeded;

    println!("{}", "Summary".bright_green().bold());
    println!(
        "   Files: {} ({} ok, {} failed)",
        reports.len().to_string().bright_white().bold(),
        succeeded,
        failed
    );
    println!("   Parser runs: {}", explorer.parses_run());
    println!("   Cache hits: {}", explorer.cache_hits());
    println!("   ⏱️  Completed in {:.2}s", elapsed.as_secs_f64());
}

fn print_preview(receipt: &IngestReceipt, preview_rows: usize) {
    if preview_rows == 0 || receipt.rows.is_empty() {
        return;
    }

    println!("   Preview:");
    for record in receipt.rows.iter().take(preview_rows) {
        let cells: Vec<String> = record.iter().map(|(_, value)| value.to_string()).collect();
        println!("     {}", cells.join(" | "));
    }
    if receipt.total_rows > preview_rows {
        println!("     ... {} more rows", receipt.total_rows - preview_rows);
    }
}

fn print_json_report(reports: &[FileReport], explorer: &DatasetExplorer) -> Result<()> {
    let files: Vec<_> = reports
        .iter()
        .map(|report| match &report.outcome {
            Ok(receipt) => json!({
                "file": report.path.display().to_string(),
                "ok": true,
                "receipt": receipt,
            }),
            Err(error) => json!({
                "file": report.path.display().to_string(),
                "ok": false,
                "error": error.to_string(),
            }),
        })
        .collect();

    let report = json!({
        "files": files,
        "parses_run": explorer.parses_run(),
        "cache_hits": explorer.cache_hits(),
        "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_csv_report(reports: &[FileReport]) {
    println!("file,status,relation,columns,rows,content_hash,parser,detail");
    for report in reports {
        let file = csv_escape(&report.path.display().to_string());
        match &report.outcome {
            Ok(receipt) => {
                let parser = if receipt.from_cache {
                    "cache".to_string()
                } else {
                    receipt
                        .stats
                        .as_ref()
                        .map(|stats| stats.parser_label().to_string())
                        .unwrap_or_default()
                };
                println!(
                    "{},ok,{},{},{},{},{},",
                    file,
                    csv_escape(&receipt.relation),
                    receipt.total_columns,
                    receipt.total_rows,
                    receipt.content_hash,
                    csv_escape(&parser)
                );
            }
            Err(error) => {
                println!("{},error,,,,,,{}", file, csv_escape(&error.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::arff_parser::parse_dataset;

    fn receipt_from(text: &str) -> IngestReceipt {
        let outcome = parse_dataset(text).unwrap();
        IngestReceipt {
            columns: outcome.table.columns.clone(),
            rows: outcome.table.records().collect(),
            total_rows: outcome.table.row_count(),
            total_columns: outcome.table.column_count(),
            relation: outcome.metadata.relation.clone(),
            description: outcome.metadata.description.clone(),
            content_hash: "abc123".to_string(),
            has_more: false,
            from_cache: false,
            stats: Some(outcome.stats),
        }
    }

    #[test]
    fn test_csv_report_shapes_one_line_per_file() {
        // Exercises the row construction without capturing stdout
        let ok = FileReport {
            path: PathBuf::from("a.arff"),
            outcome: Ok(receipt_from("@relation t\n@data\n1,2\n")),
        };
        let failed = FileReport {
            path: PathBuf::from("b.arff"),
            outcome: Err(Error::unparseable("nothing usable".to_string())),
        };
        print_csv_report(&[ok, failed]);
    }

    #[test]
    fn test_json_report_serializes_receipts() {
        let report = FileReport {
            path: PathBuf::from("a.arff"),
            outcome: Ok(receipt_from("@relation t\n@data\n1,2\n")),
        };
        let value = match &report.outcome {
            Ok(receipt) => json!({ "receipt": receipt }),
            Err(_) => unreachable!(),
        };
        assert_eq!(value["receipt"]["total_rows"], 1);
        assert_eq!(value["receipt"]["relation"], "t");
    }
}
