//! Ingest and query facade over the parser, cache, and query layers
//!
//! [`DatasetExplorer`] is the one entry point callers need: `ingest` turns
//! raw text into a cached table and a preview receipt, `query` serves pages
//! from the cache by content hash. Identical uploads are deduplicated by
//! hash, so repeated ingestion parses once; the counters expose exactly
//! that behavior.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::task;
use tracing::{debug, info};

use crate::app::models::{DataTable, DatasetMetadata, Record};
use crate::app::services::arff_parser::{ParseStats, parse_dataset};
use crate::app::services::dataset_cache::{DatasetCache, content_hash};
use crate::app::services::table_query::{PageRequest, TablePage};
use crate::config::ExplorerConfig;
use crate::{Error, Result};

/// Summary returned after a dataset is ingested
///
/// Carries the preview slice plus everything a caller needs to page through
/// the full table later: the content hash and the overall dimensions.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReceipt {
    /// Final column names
    pub columns: Vec<String>,

    /// Preview records, at most the configured preview size
    pub rows: Vec<Record>,

    /// Rows in the full table
    pub total_rows: usize,

    /// Columns in the full table
    pub total_columns: usize,

    /// Relation name from the header
    pub relation: String,

    /// Dataset description
    pub description: String,

    /// Content hash the dataset is cached under
    pub content_hash: String,

    /// Whether the table has more rows than the preview shows
    pub has_more: bool,

    /// Whether this receipt was served from cache without parsing
    pub from_cache: bool,

    /// Statistics from the parse run, absent when served from cache
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ParseStats>,
}

/// Ingest and query entry point holding the shared dataset cache
#[derive(Debug)]
pub struct DatasetExplorer {
    /// Parsed datasets keyed by content hash
    cache: Arc<DatasetCache>,

    /// Runtime configuration
    config: ExplorerConfig,

    /// Completed parser-chain runs, successful or not
    parses_run: AtomicU64,

    /// Ingest calls answered from the cache
    cache_hits: AtomicU64,
}

impl DatasetExplorer {
    /// Create an explorer with a validated configuration
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            cache: Arc::new(DatasetCache::new(config.cache_ttl())),
            config,
            parses_run: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        })
    }

    /// Ingest raw dataset text, parsing it unless an identical upload is cached
    ///
    /// Empty or whitespace-only input is rejected before hashing. Parsing
    /// runs on a blocking worker so callers on the async runtime are never
    /// stalled by a large file.
    pub async fn ingest(&self, raw_text: &str) -> Result<IngestReceipt> {
        if raw_text.trim().is_empty() {
            return Err(Error::empty_input("no dataset content provided"));
        }

        let hash = content_hash(raw_text);

        if let Some(entry) = self.cache.get(&hash).await {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            debug!("Serving dataset {} from cache", hash);
            return Ok(self.build_receipt(&entry.table, &entry.metadata, hash, true, None));
        }

        let outcome = task::spawn_blocking({
            let raw_text = raw_text.to_owned();
            move || parse_dataset(&raw_text)
        })
        .await
        .map_err(|error| Error::unparseable(format!("parsing task aborted: {}", error)))?;

        self.parses_run.fetch_add(1, Ordering::Relaxed);
        let outcome = outcome?;

        let entry = self
            .cache
            .put(hash.clone(), outcome.table, outcome.metadata)
            .await;

        info!(
            "Ingested dataset {}: {} rows x {} columns",
            hash,
            entry.table.row_count(),
            entry.table.column_count()
        );

        Ok(self.build_receipt(&entry.table, &entry.metadata, hash, false, Some(outcome.stats)))
    }

    /// Serve one page of a previously ingested dataset
    ///
    /// An unknown or expired content hash is a [`Error::CacheMiss`], telling
    /// the caller to ingest the text again rather than that parsing failed.
    pub async fn query(&self, content_hash: &str, request: &PageRequest) -> Result<TablePage> {
        let entry = self
            .cache
            .get(content_hash)
            .await
            .ok_or_else(|| Error::cache_miss(content_hash))?;

        entry.table.query_page(request)
    }

    /// Drop expired cache entries and return how many were removed
    pub async fn purge_expired(&self) -> usize {
        self.cache.purge_expired().await
    }

    /// Number of datasets currently cached
    pub async fn cached_datasets(&self) -> usize {
        self.cache.len().await
    }

    /// Completed parser-chain runs since construction
    pub fn parses_run(&self) -> u64 {
        self.parses_run.load(Ordering::Relaxed)
    }

    /// Ingest calls answered from the cache since construction
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    /// The configuration this explorer was built with
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    fn build_receipt(
        &self,
        table: &DataTable,
        metadata: &DatasetMetadata,
        content_hash: String,
        from_cache: bool,
        stats: Option<ParseStats>,
    ) -> IngestReceipt {
        let rows: Vec<Record> = table.records().take(self.config.preview_rows).collect();
        let has_more = table.row_count() > rows.len();

        IngestReceipt {
            columns: table.columns.clone(),
            rows,
            total_rows: table.row_count(),
            total_columns: table.column_count(),
            relation: metadata.relation.clone(),
            description: metadata.description.clone(),
            content_hash,
            has_more,
            from_cache,
            stats,
        }
    }
}
