//! Configuration management and validation.
//!
//! Provides the configuration structure shared by the ingestion façade,
//! the dataset cache, and the CLI drivers. The surrounding application
//! owns the configuration and passes it in; parsing code never reads
//! process-global state.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_CONCURRENT_FILES, DEFAULT_PAGE_SIZE, DEFAULT_PREVIEW_ROWS,
};
use crate::{Error, Result};

/// Global configuration for dataset ingestion and querying
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Lifetime of a cached dataset, in seconds
    pub cache_ttl_secs: u64,

    /// Number of rows included in an ingest receipt preview
    pub preview_rows: usize,

    /// Page size applied when a caller does not specify one
    pub default_page_size: usize,

    /// Maximum number of files ingested concurrently by batch drivers
    pub max_concurrent_files: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_concurrent_files: DEFAULT_MAX_CONCURRENT_FILES,
        }
    }
}

impl ExplorerConfig {
    /// Set the cache entry lifetime in seconds (zero disables reuse)
    pub fn with_cache_ttl_secs(mut self, secs: u64) -> Self {
        self.cache_ttl_secs = secs;
        self
    }

    /// Set the number of preview rows in ingest receipts
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Set the fallback page size for queries
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Set the concurrent-file limit for batch ingestion
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Cache entry lifetime as a duration
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_secs.min(i64::MAX as u64) as i64)
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.preview_rows == 0 {
            return Err(Error::configuration(
                "preview_rows must be at least 1".to_string(),
            ));
        }
        if self.default_page_size == 0 {
            return Err(Error::configuration(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.max_concurrent_files == 0 {
            return Err(Error::configuration(
                "max_concurrent_files must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
