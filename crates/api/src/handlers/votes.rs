//! Handlers for the `/votes` resource.
//!
//! One endpoint per target kind; both run the same three-way
//! cast/toggle/change state machine in the repository. Self-voting is
//! rejected before the ledger is touched.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use stackit_core::error::CoreError;
use stackit_core::types::DbId;
use stackit_core::votes::{VoteTarget, VoteType};
use stackit_db::models::vote::CastVoteRequest;
use stackit_db::repositories::{AnswerRepo, QuestionRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::policy::ensure_not_author;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a cast-vote call.
#[derive(Debug, Serialize)]
pub struct VoteResult {
    pub message: &'static str,
    pub vote_count: i64,
}

/// POST /votes/question/{id}
///
/// Cast, toggle, or change a vote on a question.
pub async fn vote_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CastVoteRequest>,
) -> AppResult<impl IntoResponse> {
    let vote_type = VoteType::parse(&input.vote_type)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    ensure_not_author(&auth, question.author_id, "You cannot vote on your own question")?;

    let (outcome, vote_count) =
        VoteRepo::cast(&state.pool, VoteTarget::Question, id, auth.user_id, vote_type).await?;

    Ok(Json(DataResponse {
        data: VoteResult {
            message: outcome.message(),
            vote_count,
        },
    }))
}

/// POST /votes/answer/{id}
///
/// Cast, toggle, or change a vote on an answer.
pub async fn vote_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CastVoteRequest>,
) -> AppResult<impl IntoResponse> {
    let vote_type = VoteType::parse(&input.vote_type)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let answer = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;

    ensure_not_author(&auth, answer.author_id, "You cannot vote on your own answer")?;

    let (outcome, vote_count) =
        VoteRepo::cast(&state.pool, VoteTarget::Answer, id, auth.user_id, vote_type).await?;

    Ok(Json(DataResponse {
        data: VoteResult {
            message: outcome.message(),
            vote_count,
        },
    }))
}

/// GET /votes/user
///
/// The caller's vote history, newest first.
pub async fn my_votes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let votes = VoteRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: votes }))
}
