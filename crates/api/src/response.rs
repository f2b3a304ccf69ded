//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; paginated
//! listings add page metadata. Use these instead of ad-hoc
//! `serde_json::json!` so serialization stays consistent.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated listing envelope: `{ "data", "page", "pages", "total" }`.
///
/// `page` is the 1-indexed page that was served, `pages` the total page
/// count for the fixed page size, `total` the total number of matching
/// rows.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub page: i64,
    pub pages: i64,
    pub total: i64,
}
