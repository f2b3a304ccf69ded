//! Route definitions for the `/answers` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::answers;
use crate::state::AppState;

/// Answer routes.
///
/// ```text
/// POST   /{questionId}              -> create_answer
/// PUT    /{id}                      -> update_answer
/// DELETE /{id}                      -> delete_answer
/// PUT    /{id}/accept               -> accept_answer
/// GET    /question/{questionId}     -> list_by_question
/// GET    /user/{userId}             -> list_user_answers (?pageNumber)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            post(answers::create_answer)
                .put(answers::update_answer)
                .delete(answers::delete_answer),
        )
        .route("/{id}/accept", put(answers::accept_answer))
        .route("/question/{question_id}", get(answers::list_by_question))
        .route("/user/{user_id}", get(answers::list_user_answers))
}
