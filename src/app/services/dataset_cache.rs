//! Content-addressed TTL cache for parsed datasets
//!
//! Repeated uploads of identical text are served from memory instead of
//! being parsed again. Entries are keyed by the SHA-256 hex digest of the
//! raw input and expire once their age reaches the configured lifetime;
//! expired entries are dropped lazily on access and by the periodic sweep.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;
use tracing::debug;

use crate::app::models::{DataTable, DatasetMetadata};

/// Compute the cache key for raw dataset text
///
/// The key is the lowercase SHA-256 hex digest of the exact bytes, so
/// uploads that differ only in whitespace are distinct datasets.
pub fn content_hash(raw_text: &str) -> String {
    format!("{:x}", Sha256::digest(raw_text.as_bytes()))
}

/// One cached parse result with its admission time
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The sanitized table
    pub table: DataTable,

    /// Header metadata extracted alongside the table
    pub metadata: DatasetMetadata,

    /// When the entry was admitted
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    fn new(table: DataTable, metadata: DatasetMetadata) -> Self {
        Self {
            table,
            metadata,
            created_at: Utc::now(),
        }
    }

    /// Check whether the entry has outlived the given lifetime at `now`
    ///
    /// Age equal to the lifetime counts as expired, so a zero lifetime
    /// disables caching deterministically.
    fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.created_at) >= ttl
    }
}

/// In-memory dataset cache keyed by content hash
#[derive(Debug)]
pub struct DatasetCache {
    /// Cached entries behind an async lock
    entries: Mutex<HashMap<String, Arc<CacheEntry>>>,

    /// Entry lifetime
    ttl: Duration,
}

impl DatasetCache {
    /// Create an empty cache with the given entry lifetime
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Admit a parse result under its content hash, replacing any previous entry
    pub async fn put(
        &self,
        content_hash: String,
        table: DataTable,
        metadata: DatasetMetadata,
    ) -> Arc<CacheEntry> {
        let entry = Arc::new(CacheEntry::new(table, metadata));
        let mut entries = self.entries.lock().await;

        if entries
            .insert(content_hash.clone(), Arc::clone(&entry))
            .is_some()
        {
            debug!("Replaced cached dataset {}", content_hash);
        } else {
            debug!("Cached dataset {}", content_hash);
        }

        entry
    }

    /// Look up a dataset by content hash
    ///
    /// An expired entry is removed on the way out and reported as a miss.
    pub async fn get(&self, content_hash: &str) -> Option<Arc<CacheEntry>> {
        let now = Utc::now();
        let mut entries = self.entries.lock().await;

        match entries.get(content_hash) {
            Some(entry) if entry.is_expired(self.ttl, now) => {
                entries.remove(content_hash);
                debug!("Dropped expired dataset {}", content_hash);
                None
            }
            Some(entry) => Some(Arc::clone(entry)),
            None => None,
        }
    }

    /// Drop every expired entry and return how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.lock().await;

        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl, now));
        let removed = before - entries.len();

        if removed > 0 {
            debug!("Purged {} expired datasets", removed);
        }
        removed
    }

    /// Number of entries currently held, expired or not
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Check whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
