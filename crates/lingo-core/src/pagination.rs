//! Page arithmetic shared by every paginated listing.
//!
//! Pages are 1-based. A request for page `p` with `n` items per page skips
//! `(p - 1) * n` rows. Page numbers below 1 are passed through untouched; the
//! resulting negative offset is treated as 0 by the store.

use std::num::NonZeroU32;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: NonZeroU32,
}

impl PageRequest {
    /// Build a request. Returns `None` when `per_page` is zero.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Option<Self> {
        NonZeroU32::new(per_page).map(|per_page| Self { page, per_page })
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page.get()
    }

    /// SQL `OFFSET` for this page. Negative when `page == 0`.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page.get())
    }

    /// SQL `LIMIT` for this page.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page.get())
    }

    /// Pagination metadata for a result set with `total_items` rows.
    #[must_use]
    pub fn paginate(&self, total_items: u64) -> Pagination {
        Pagination {
            current_page: self.page,
            total_pages: total_pages(total_items, self.per_page),
            total_items,
            items_per_page: self.per_page.get(),
        }
    }
}

/// Ceiling division of `total_items` by `per_page`. Zero items means zero pages.
#[must_use]
pub fn total_pages(total_items: u64, per_page: NonZeroU32) -> u64 {
    total_items.div_ceil(u64::from(per_page.get()))
}

/// Pagination metadata attached to every listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl Pagination {
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) < self.total_pages
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// One page of items plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
