//! Route definitions for the `/votes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Vote routes.
///
/// ```text
/// POST /question/{id}   -> vote_question
/// POST /answer/{id}     -> vote_answer
/// GET  /user            -> my_votes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/question/{id}", post(votes::vote_question))
        .route("/answer/{id}", post(votes::vote_answer))
        .route("/user", get(votes::my_votes))
}
