//! Parsing statistics and result structures for dataset ingestion
//!
//! This module provides types for tracking which parsing path succeeded,
//! how much data survived, and what was discarded along the way.

use crate::app::models::{DataTable, DatasetMetadata};

/// Parsing result with the table, its header metadata, and statistics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The sanitized rectangular table
    pub table: DataTable,

    /// Header metadata extracted before parsing
    pub metadata: DatasetMetadata,

    /// Statistics describing how the table was obtained
    pub stats: ParseStats,
}

/// Statistics for one run of the parsing pipeline
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of configurations attempted before one was accepted
    pub strategies_tried: usize,

    /// Name of the accepted configuration, if any succeeded
    pub winning_strategy: Option<String>,

    /// Whether the character-level fallback produced the table
    pub used_manual_fallback: bool,

    /// Rows in the final table
    pub rows_parsed: usize,

    /// Malformed rows dropped individually by the accepted configuration
    pub rows_skipped: usize,

    /// Whether declared attribute names were set aside for generic names
    pub header_mismatch: bool,

    /// Non-finite numeric cells replaced with null
    pub values_sanitized: usize,

    /// Non-fatal problems collected along the way, for diagnostics
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            strategies_tried: 0,
            winning_strategy: None,
            used_manual_fallback: false,
            rows_parsed: 0,
            rows_skipped: 0,
            header_mismatch: false,
            values_sanitized: 0,
            errors: Vec::new(),
        }
    }

    /// Human-readable name of the parsing path that produced the table
    pub fn parser_label(&self) -> &str {
        if self.used_manual_fallback {
            return "manual fallback";
        }
        self.winning_strategy.as_deref().unwrap_or("none")
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
