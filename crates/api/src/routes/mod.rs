pub mod answers;
pub mod auth;
pub mod health;
pub mod questions;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/profile                      get, update (requires auth)
///
/// /questions                         list/search (GET), create (POST)
/// /questions/trending                top 10 by views (GET)
/// /questions/unanswered              newest unanswered 10 (GET)
/// /questions/{id}                    get (+views), update, delete
///
/// /answers/{questionId}              create (POST)
/// /answers/{id}                      update, delete
/// /answers/{id}/accept               accept (PUT, question author/admin)
/// /answers/question/{questionId}     list for question (GET)
/// /answers/user/{userId}             paginated list for user (GET)
///
/// /votes/question/{id}               cast/toggle/change vote (POST)
/// /votes/answer/{id}                 cast/toggle/change vote (POST)
/// /votes/user                        caller's vote history (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/questions", questions::router())
        .nest("/answers", answers::router())
        .nest("/votes", votes::router())
}
