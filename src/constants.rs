//! Application constants for ARFF explorer
//!
//! This module contains the format markers, default values, and naming
//! helpers used throughout the ingestion and query pipeline.

// =============================================================================
// ARFF Format Markers
// =============================================================================

/// Marker introducing the relation declaration (case-insensitive in files)
pub const RELATION_MARKER: &str = "@relation";

/// Marker introducing an attribute declaration (case-insensitive in files)
pub const ATTRIBUTE_MARKER: &str = "@attribute";

/// Marker separating the header from the data segment (case-insensitive in files)
pub const DATA_MARKER: &str = "@data";

/// Comment marker for header and data lines
pub const COMMENT_MARKER: char = '%';

/// Quote characters recognized around relation and attribute names
pub const NAME_QUOTE_CHARS: &[char] = &['\'', '"'];

// =============================================================================
// Metadata Defaults
// =============================================================================

/// Relation name reported when the header declares none
pub const DEFAULT_RELATION: &str = "N/A";

/// Description reported when the header carries none
pub const DEFAULT_DESCRIPTION: &str = "ARFF dataset";

// =============================================================================
// Table Naming
// =============================================================================

/// Prefix for generated column names when no usable header exists
pub const GENERIC_COLUMN_PREFIX: &str = "column_";

// =============================================================================
// Cache and Query Defaults
// =============================================================================

/// Default lifetime of a cached dataset, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Default number of rows included in an ingest receipt preview
pub const DEFAULT_PREVIEW_ROWS: usize = 1000;

/// Default page size for paginated queries
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Default number of files ingested concurrently by batch commands
pub const DEFAULT_MAX_CONCURRENT_FILES: usize = 8;

// =============================================================================
// Helper Functions
// =============================================================================

/// Generate the 1-based generic name for a column index
pub fn generic_column_name(index: usize) -> String {
    format!("{}{}", GENERIC_COLUMN_PREFIX, index + 1)
}

/// Generate generic names for an entire table width
pub fn generic_column_names(count: usize) -> Vec<String> {
    (0..count).map(generic_column_name).collect()
}

/// Check whether a line carries no data (blank or comment)
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Strip matching surrounding quote characters from a name token
pub fn strip_name_quotes(token: &str) -> &str {
    token.trim().trim_matches(NAME_QUOTE_CHARS)
}

/// Check whether a trimmed line begins with a marker, ignoring ASCII case
pub fn line_has_marker(line: &str, marker: &str) -> bool {
    line.get(..marker.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(marker))
}
