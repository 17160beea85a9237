//! ARFF Explorer Library
//!
//! A Rust library for ingesting loosely-structured tabular text (ARFF-style
//! headers followed by delimited data, or bare CSV) into clean, queryable
//! in-memory tables.
//!
//! This library provides tools for:
//! - Extracting relation and attribute metadata from ARFF-style headers
//! - Parsing messy delimited data through an ordered chain of reader configurations
//! - Recovering otherwise unparseable files with a quote-aware manual tokenizer
//! - Normalizing non-finite numeric values for strict JSON emission
//! - Deduplicating repeated uploads through a content-addressed TTL cache
//! - Serving paginated, searchable views over cached tables

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod arff_parser;
        pub mod dataset_cache;
        pub mod explorer;
        pub mod table_query;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellValue, DataTable, DatasetMetadata, Record};
pub use app::services::explorer::{DatasetExplorer, IngestReceipt};
pub use app::services::table_query::{PageRequest, TablePage};
pub use config::ExplorerConfig;

/// Result type alias for ARFF explorer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for ingestion and query operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Request rejected before parsing began
    #[error("Input error: {message}")]
    EmptyInput { message: String },

    /// Every parsing configuration and the manual fallback produced zero rows
    #[error("Parse failure: {message}")]
    Unparseable { message: String },

    /// Query referenced a content hash that is unknown or expired
    #[error("Cache miss: no dataset for content hash '{content_hash}'")]
    CacheMiss { content_hash: String },

    /// Page number or page size outside the caller contract
    #[error("Invalid page request: {message}")]
    InvalidPageRequest { message: String },

    /// Rows do not line up with the declared columns
    #[error("Table shape error: {message}")]
    TableShape { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an input error for missing or empty content
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a parse failure after the full strategy chain is exhausted
    pub fn unparseable(message: impl Into<String>) -> Self {
        Self::Unparseable {
            message: message.into(),
        }
    }

    /// Create a cache miss error for an unknown or expired content hash
    pub fn cache_miss(content_hash: impl Into<String>) -> Self {
        Self::CacheMiss {
            content_hash: content_hash.into(),
        }
    }

    /// Create an invalid page request error
    pub fn invalid_page_request(message: impl Into<String>) -> Self {
        Self::InvalidPageRequest {
            message: message.into(),
        }
    }

    /// Create a table shape error
    pub fn table_shape(message: impl Into<String>) -> Self {
        Self::TableShape {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
