//! Paginated, searchable views over parsed tables
//!
//! Queries never mutate the table: a request selects matching row indices,
//! slices out the requested page, and wraps it in an envelope describing
//! the filtered view as a whole. Filtering happens before pagination, so
//! the totals always refer to what the filter kept.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::{DataTable, Record};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::{Error, Result};

/// Parameters for one page of a table view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: usize,

    /// Rows per page
    pub page_size: usize,

    /// Optional case-insensitive substring filter over every cell
    pub search: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl PageRequest {
    /// Create a request for a specific page with no filter
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            search: None,
        }
    }

    /// Attach a search filter
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Validate the 1-based page number and non-zero page size
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::invalid_page_request("page numbers start at 1"));
        }
        if self.page_size == 0 {
            return Err(Error::invalid_page_request("page size must be at least 1"));
        }
        Ok(())
    }

    /// The filter to apply, if a non-empty one was given
    fn active_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|query| !query.is_empty())
    }
}

/// One page of records with its pagination envelope
#[derive(Debug, Clone, Serialize)]
pub struct TablePage {
    /// Records for this page, in table order
    pub rows: Vec<Record>,

    /// 1-based page number that was requested
    pub page: usize,

    /// Requested page size
    pub page_size: usize,

    /// Rows matching the filter across all pages
    pub total_rows: usize,

    /// Pages needed to show every matching row
    pub total_pages: usize,

    /// Whether a later page exists
    pub has_next: bool,

    /// Whether an earlier page exists
    pub has_previous: bool,
}

impl DataTable {
    /// Produce one page of records, applying the search filter first
    ///
    /// A page past the end of the filtered view is valid and comes back
    /// empty, with the totals still describing the whole view.
    pub fn query_page(&self, request: &PageRequest) -> Result<TablePage> {
        request.validate()?;

        let matching: Vec<usize> = match request.active_search() {
            Some(query) => {
                let needle = query.to_lowercase();
                (0..self.row_count())
                    .filter(|&index| self.row_matches(index, &needle))
                    .collect()
            }
            None => (0..self.row_count()).collect(),
        };

        let total_rows = matching.len();
        let total_pages = total_rows.div_ceil(request.page_size);

        let start = (request.page - 1).saturating_mul(request.page_size);
        let rows: Vec<Record> = matching
            .iter()
            .skip(start)
            .take(request.page_size)
            .filter_map(|&index| self.record(index))
            .collect();

        debug!(
            "Page {} of {}: {} rows shown, {} matching in total",
            request.page,
            total_pages,
            rows.len(),
            total_rows
        );

        Ok(TablePage {
            rows,
            page: request.page,
            page_size: request.page_size,
            total_rows,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        })
    }

    /// Check whether any cell in a row contains the lowercased needle
    fn row_matches(&self, index: usize, needle: &str) -> bool {
        self.rows[index]
            .iter()
            .any(|cell| cell.to_string().to_lowercase().contains(needle))
    }
}
