//! Pagination metadata for list queries.

use serde::Serialize;

/// Page number applied when a request does not specify one.
pub const DEFAULT_CURRENT_PAGE: i64 = 1;

/// Page size applied when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Pagination metadata echoed back alongside a page of results.
///
/// `page_size` and `current_page` report what the repository actually
/// applied, which may differ from the values the caller asked for when the
/// repository normalizes its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page_size: usize,
    /// 1-based page number.
    pub current_page: usize,
    /// Number of pages the full result set spans.
    pub total_pages: usize,
}
