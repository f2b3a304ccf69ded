//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?pageNumber=`), 1-indexed.
///
/// Values are clamped via `stackit_core::pagination::clamp_page`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(rename = "pageNumber")]
    pub page_number: Option<i64>,
}
