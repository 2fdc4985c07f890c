//! Offset pagination for listings.
//!
//! `page` and `limit` are not range-checked: non-positive values are handed
//! to the store as-is and whatever it does with them is the result.

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// A one-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    #[must_use]
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Number of rows skipped before this page: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`, or `0` when `limit` is not positive.
    #[must_use]
    pub fn total_pages(&self, total: i64) -> i64 {
        if self.limit <= 0 || total <= 0 {
            return 0;
        }
        (total - 1) / self.limit + 1
    }
}

/// One page of rows together with the size of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    #[must_use]
    pub fn summary(&self) -> Pagination {
        Pagination {
            total: self.total,
            page: self.request.page,
            limit: self.request.limit,
            total_pages: self.request.total_pages(self.total),
        }
    }
}

/// Pagination metadata as exposed to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}
