//! Paging types shared by the repositories and the API

use serde::Deserialize;

use crate::config::PaginationConfig;

/// Raw `page` / `per_page` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<i64>,
    /// Items per page
    pub per_page: Option<i64>,
}

/// A normalized page request: `page >= 1`, `1 <= per_page <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Resolve query parameters against configured defaults and limits
    pub fn from_query(query: &PageQuery, limits: &PaginationConfig) -> Self {
        let per_page = query
            .per_page
            .unwrap_or(limits.default_per_page)
            .min(limits.max_per_page);
        Self::new(query.page.unwrap_or(1), per_page)
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// One page of records plus the total count across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
