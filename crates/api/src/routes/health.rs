//! Root-level health probe.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// GET / -> plain-text liveness message.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> &'static str {
    "StackIt Q&A Forum API is running"
}
