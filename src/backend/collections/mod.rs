//! Collections Module
//!
//! Pure, side-effect-free operations over the record sequences stored in the
//! shared document. Handlers apply exactly one of these operations per
//! request inside the read-modify-write coordinator.
//!
//! # Module Structure
//!
//! ```text
//! collections/
//! ├── mod.rs - Module exports and the shared list query type
//! └── ops.rs - Sequence operations (insert, lookup, filter, paginate)
//! ```

/// Sequence operations
pub mod ops;

use serde::Deserialize;

// Re-export commonly used items
pub use ops::{
    delete_by_id, exists_username, filter_substring, find_by_id, insert_back, insert_front,
    paginate, update_by_id, Page, Record, Searchable,
};

/// Default page size when `limit` is not supplied on a paged request
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Query parameters shared by every list endpoint
///
/// `search` filters by case-insensitive substring across the collection's
/// text fields. `page`/`limit` switch the response from a bare array to a
/// paged envelope; when only one of the two is given the other defaults
/// (`page` to 1, `limit` to [`DEFAULT_PAGE_LIMIT`]).
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring filter
    pub search: Option<String>,
    /// 1-indexed page number
    pub page: Option<usize>,
    /// Maximum records per page
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Whether the caller asked for a paged envelope
    pub fn is_paged(&self) -> bool {
        self.page.is_some() || self.limit.is_some()
    }

    /// Resolved `(page, limit)` pair with defaults applied
    pub fn page_params(&self) -> (usize, usize) {
        (
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }

    /// The search needle, empty when absent
    pub fn needle(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}
