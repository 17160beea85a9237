//! Parsing pipeline orchestration
//!
//! Ties the pieces together: header metadata extraction, data segment
//! location, the ordered configuration attempts, the manual fallback, and
//! final sanitisation into a rectangular [`DataTable`].

use tracing::{debug, info, warn};

use crate::app::models::{CellValue, DataTable};
use crate::constants::{DATA_MARKER, generic_column_names, line_has_marker};
use crate::{Error, Result};

use super::manual::parse_manually;
use super::metadata::extract_metadata;
use super::sanitize::sanitize_table;
use super::stats::{ParseOutcome, ParseStats};
use super::strategies::{STRATEGIES, StrategyOutcome, apply_strategy};

/// Parse raw ARFF or bare delimited text into a sanitized table
///
/// Header metadata is extracted first and never fails. The data segment is
/// everything after the first `@data` line, or the whole input when no such
/// line exists. Each configuration is tried in order; if all are rejected
/// the manual splitter has the final say. Declared attribute names are
/// applied only when a data segment was found and the declared count matches
/// the parsed width.
pub fn parse_dataset(raw_text: &str) -> Result<ParseOutcome> {
    let metadata = extract_metadata(raw_text);
    let mut stats = ParseStats::new();

    let (data, expected_names): (&str, &[String]) = match locate_data_segment(raw_text) {
        Some(segment) => {
            debug!("Found data marker; parsing the segment after it");
            (segment, &metadata.attributes)
        }
        None => {
            debug!("No data marker; treating the whole input as delimited text");
            (raw_text, &[])
        }
    };

    let expected_width = match expected_names.len() {
        0 => None,
        width => Some(width),
    };

    let mut accepted: Option<Vec<Vec<CellValue>>> = None;

    for strategy in STRATEGIES {
        stats.strategies_tried += 1;
        match apply_strategy(strategy, data, expected_width) {
            StrategyOutcome::Rows { rows, rows_skipped } => {
                debug!(
                    "Configuration '{}' accepted: {} rows ({} skipped)",
                    strategy.name,
                    rows.len(),
                    rows_skipped
                );
                stats.winning_strategy = Some(strategy.name.to_string());
                stats.rows_skipped = rows_skipped;
                accepted = Some(rows);
                break;
            }
            StrategyOutcome::Failed { reason } => {
                debug!("Configuration '{}' rejected: {}", strategy.name, reason);
                stats.errors.push(format!("{}: {}", strategy.name, reason));
            }
        }
    }

    let rows = match accepted {
        Some(rows) => rows,
        None => {
            warn!("All configurations rejected the data; using the manual splitter");
            stats.used_manual_fallback = true;
            parse_manually(data).ok_or_else(|| {
                Error::unparseable("no configuration or manual split produced any rows")
            })?
        }
    };

    let width = rows.first().map(|row| row.len()).unwrap_or(0);
    let (columns, header_mismatch) = resolve_columns(expected_names, width);
    stats.header_mismatch = header_mismatch;

    let mut table = DataTable::new(columns, rows)?;
    stats.values_sanitized = sanitize_table(&mut table);
    stats.rows_parsed = table.row_count();

    info!(
        "Parsed {} rows x {} columns via {}",
        table.row_count(),
        table.column_count(),
        stats.parser_label()
    );

    Ok(ParseOutcome {
        table,
        metadata,
        stats,
    })
}

/// Find the data segment following the first `@data` line
///
/// Returns `None` when the input has no data marker, which signals bare
/// delimited text rather than an error.
fn locate_data_segment(raw_text: &str) -> Option<&str> {
    let mut offset = 0;
    for line in raw_text.split_inclusive('\n') {
        offset += line.len();
        if line_has_marker(line.trim(), DATA_MARKER) {
            return Some(&raw_text[offset..]);
        }
    }
    None
}

/// Choose final column names for a parsed width
///
/// Declared names are used only when the counts line up and no name repeats;
/// otherwise every column gets a generated name and the mismatch is flagged.
fn resolve_columns(expected: &[String], width: usize) -> (Vec<String>, bool) {
    if expected.is_empty() {
        return (generic_column_names(width), false);
    }

    if expected.len() != width {
        warn!(
            "Header declares {} attributes but data has {} columns; using generic names",
            expected.len(),
            width
        );
        return (generic_column_names(width), true);
    }

    if has_repeats(expected) {
        warn!("Header repeats attribute names; using generic names");
        return (generic_column_names(width), true);
    }

    (expected.to_vec(), false)
}

fn has_repeats(names: &[String]) -> bool {
    names
        .iter()
        .enumerate()
        .any(|(index, name)| names[..index].contains(name))
}
