//! Ordered delimiter/quoting configurations for the data segment
//!
//! Configurations are tried strictly in order; the first one producing a
//! non-empty rectangular table wins. A configuration absorbs its own
//! problems rather than surfacing them: overlong rows cost themselves,
//! structural inconsistency costs the whole attempt, and the next
//! configuration gets its turn.

use crate::app::models::CellValue;
use crate::constants::COMMENT_MARKER;

/// One delimiter/quoting configuration attempted against the data segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStrategy {
    /// Short name used in logs and statistics
    pub name: &'static str,

    /// Field delimiter byte
    pub delimiter: u8,

    /// Quote byte
    pub quote: u8,

    /// Whether quoting is interpreted at all
    pub quoting: bool,

    /// Escape byte for backslash-style quote escapes
    pub escape: Option<u8>,
}

/// Configurations in the order they are attempted
pub const STRATEGIES: &[ParseStrategy] = &[
    ParseStrategy {
        name: "comma-escaped",
        delimiter: b',',
        quote: b'"',
        quoting: true,
        escape: Some(b'\\'),
    },
    ParseStrategy {
        name: "comma-quoted",
        delimiter: b',',
        quote: b'"',
        quoting: true,
        escape: None,
    },
    ParseStrategy {
        name: "tab-quoted",
        delimiter: b'\t',
        quote: b'"',
        quoting: true,
        escape: None,
    },
    ParseStrategy {
        name: "comma-unquoted",
        delimiter: b',',
        quote: b'"',
        quoting: false,
        escape: None,
    },
];

/// Result of one configuration attempt
#[derive(Debug)]
pub enum StrategyOutcome {
    /// A non-empty rectangular set of typed rows
    Rows {
        rows: Vec<Vec<CellValue>>,
        rows_skipped: usize,
    },

    /// Nothing usable; the reason is kept for diagnostics
    Failed { reason: String },
}

/// Apply one configuration to the data segment
///
/// The reader skips comment lines and trims fields before type inference.
/// Rows with more fields than the first row established are dropped
/// individually; rows with fewer fields fail the attempt, as does a
/// delimiter that never splits anything unless a one-column table is
/// exactly what the header declared.
pub fn apply_strategy(
    strategy: &ParseStrategy,
    data: &str,
    expected_width: Option<usize>,
) -> StrategyOutcome {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(strategy.delimiter)
        .quote(strategy.quote)
        .quoting(strategy.quoting)
        .escape(strategy.escape)
        .comment(Some(COMMENT_MARKER as u8))
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    let mut rows_skipped = 0usize;

    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => rows.push(record.iter().map(CellValue::infer).collect()),
            Err(error) => match error.kind() {
                csv::ErrorKind::UnequalLengths {
                    expected_len, len, ..
                } if len > expected_len => {
                    // Overlong rows are bad lines; drop them and keep going
                    rows_skipped += 1;
                }
                csv::ErrorKind::UnequalLengths {
                    expected_len, len, ..
                } => {
                    return StrategyOutcome::Failed {
                        reason: format!(
                            "row {} has {} fields where {} were established",
                            index + 1,
                            len,
                            expected_len
                        ),
                    };
                }
                _ => {
                    rows_skipped += 1;
                }
            },
        }
    }

    if rows.is_empty() {
        return StrategyOutcome::Failed {
            reason: "no rows produced".to_string(),
        };
    }

    let width = rows[0].len();
    if width == 1 && expected_width != Some(1) {
        return StrategyOutcome::Failed {
            reason: "delimiter never split any line".to_string(),
        };
    }

    StrategyOutcome::Rows { rows, rows_skipped }
}
