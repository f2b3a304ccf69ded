//! Route definitions for the `/questions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes.
///
/// ```text
/// GET    /              -> list_questions (?keyword, tag, pageNumber)
/// POST   /              -> create_question
/// GET    /trending      -> trending_questions
/// GET    /unanswered    -> unanswered_questions
/// GET    /{id}          -> get_question (increments views)
/// PUT    /{id}          -> update_question
/// DELETE /{id}          -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/trending", get(questions::trending_questions))
        .route("/unanswered", get(questions::unanswered_questions))
        .route(
            "/{id}",
            get(questions::get_question)
                .put(questions::update_question)
                .delete(questions::delete_question),
        )
}
