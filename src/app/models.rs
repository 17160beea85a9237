//! Data models for ARFF ingestion
//!
//! This module contains the core data structures for representing parsed
//! datasets: scalar cell values, ordered row records, header metadata, and
//! the rectangular in-memory table the query layer reads from.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_RELATION};
use crate::{Error, Result};

// =============================================================================
// Cell Values
// =============================================================================

/// A single scalar cell in a parsed table
///
/// Cells are inferred from raw text fields: empty fields become `Null`,
/// boolean and numeric literals are typed, and everything else stays text.
/// Serializes untagged, so a row renders as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Explicit missing value, rendered as JSON null
    Null,

    /// Boolean literal (`true`/`false`, any case)
    Bool(bool),

    /// Integer literal
    Int(i64),

    /// Floating point literal; may be non-finite until sanitized
    Float(f64),

    /// Free text
    Text(String),
}

impl CellValue {
    /// Infer the typed value of a raw text field
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }
        if let Ok(integer) = trimmed.parse::<i64>() {
            return CellValue::Int(integer);
        }
        // Also catches literal NaN/inf fields, which the sanitizer nulls out
        if let Ok(float) = trimmed.parse::<f64>() {
            return CellValue::Float(float);
        }
        CellValue::Text(trimmed.to_string())
    }

    /// Check whether this cell is the explicit missing marker
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check whether this cell holds a NaN or infinite float
    pub fn is_non_finite(&self) -> bool {
        matches!(self, CellValue::Float(value) if !value.is_finite())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(value) => write!(f, "{}", value),
            CellValue::Int(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::Text(value) => write!(f, "{}", value),
        }
    }
}

// =============================================================================
// Row Records
// =============================================================================

/// One table row as an ordered mapping from column name to cell value
///
/// Serializes as a JSON object whose keys appear in column order, which a
/// plain map type would not guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Vec<(String, CellValue)>);

impl Record {
    /// Create a record from ordered column/value pairs
    pub fn new(entries: Vec<(String, CellValue)>) -> Self {
        Self(entries)
    }

    /// Look up a cell by column name
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Iterate the column/value pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = &(String, CellValue)> {
        self.0.iter()
    }

    /// Number of columns in this record
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (column, value) in &self.0 {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Header Metadata
// =============================================================================

/// Header metadata extracted from an ARFF-style file
///
/// Immutable once extracted; extraction never fails and falls back to these
/// defaults when declarations are absent or unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Relation name from the `@relation` declaration
    pub relation: String,

    /// Attribute names in declaration order
    pub attributes: Vec<String>,

    /// Free-text description of the dataset
    pub description: String,
}

impl Default for DatasetMetadata {
    fn default() -> Self {
        Self {
            relation: DEFAULT_RELATION.to_string(),
            attributes: Vec::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl DatasetMetadata {
    /// Check whether any attribute declarations were found
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Number of declared attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

// =============================================================================
// Tables
// =============================================================================

/// A rectangular in-memory table of parsed data
///
/// Every row holds exactly `columns.len()` cells in column order; parsers pad
/// ragged input before constructing a table, so construction enforces the
/// invariant rather than repairing violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Column names, unique and ordered
    pub columns: Vec<String>,

    /// Row data, each row in column order
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Create a table, validating the rectangular-shape invariant
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let table = Self { columns, rows };
        table.validate()?;
        Ok(table)
    }

    /// Validate column uniqueness and row widths
    pub fn validate(&self) -> Result<()> {
        for (index, column) in self.columns.iter().enumerate() {
            if self.columns[..index].contains(column) {
                return Err(Error::table_shape(format!(
                    "duplicate column name '{}'",
                    column
                )));
            }
        }

        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(Error::table_shape(format!(
                    "row {} has {} cells but the table declares {} columns",
                    index,
                    row.len(),
                    self.columns.len()
                )));
            }
        }

        Ok(())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build the ordered record for one row
    pub fn record(&self, index: usize) -> Option<Record> {
        self.rows.get(index).map(|row| {
            Record::new(
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect(),
            )
        })
    }

    /// Iterate all rows as ordered records
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        (0..self.rows.len()).filter_map(|index| self.record(index))
    }
}
