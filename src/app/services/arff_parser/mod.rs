//! Fault-tolerant parser for ARFF-style and bare delimited datasets
//!
//! This module turns raw file text into a rectangular [`DataTable`] plus
//! header metadata, tolerating malformed rows, mismatched attribute counts,
//! and files with no recognizable structure at all. Parsing is pure and
//! synchronous; callers that need to keep an async runtime responsive run it
//! on a blocking task.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration: segment split, strategy chain, fallback
//! - [`metadata`] - ARFF header metadata extraction
//! - [`strategies`] - Ordered delimiter/quoting configurations
//! - [`manual`] - Quote-aware character-level fallback tokenizer
//! - [`sanitize`] - Non-finite value normalization
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use arff_explorer::app::services::arff_parser::parse_dataset;
//!
//! # fn example() -> arff_explorer::Result<()> {
//! let outcome = parse_dataset("@relation demo\n@attribute a numeric\n@data\n1\n2\n")?;
//!
//! println!(
//!     "Parsed {} rows of '{}'",
//!     outcome.table.row_count(),
//!     outcome.metadata.relation
//! );
//! # Ok(())
//! # }
//! ```
//!
//! [`DataTable`]: crate::app::models::DataTable

pub mod manual;
pub mod metadata;
pub mod parser;
pub mod sanitize;
pub mod stats;
pub mod strategies;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use metadata::extract_metadata;
pub use parser::parse_dataset;
pub use stats::{ParseOutcome, ParseStats};
pub use strategies::{ParseStrategy, STRATEGIES};
