//! Pagination utilities for service layer
//!
//! `Pagination` normalizes 1-based inputs; `Paging` is the metadata echoed to
//! clients next to a page of results.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Keeps `(page - 1) * size` well inside the store's signed OFFSET.
pub const MAX_PAGE: u64 = 1_000_000;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub size: u64,
}

impl Pagination {
    pub fn new(page: u64, size: u64) -> Self { Self { page, size } }

    /// Clamp to sane defaults; returns the 0-based page index and the page size.
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.clamp(1, MAX_PAGE);
        let size = self.size.clamp(1, MAX_PAGE_SIZE);
        (page - 1, size)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, size: DEFAULT_PAGE_SIZE } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: u64,
    pub total_page: u64,
    pub total_item: u64,
}

impl Paging {
    pub fn new(opts: Pagination, total_item: u64) -> Self {
        let (idx, size) = opts.normalize();
        Self { page: idx + 1, total_page: total_item.div_ceil(size), total_item }
    }
}

/// One page of results plus paging metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}
