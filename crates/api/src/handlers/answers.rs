//! Handlers for the `/answers` resource.
//!
//! Creation (one answer per user per question), edits with history,
//! deletion (resetting the parent question when the accepted answer
//! goes away), acceptance, and the two listings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use stackit_core::answers::validate_content;
use stackit_core::error::CoreError;
use stackit_core::pagination::{clamp_page, page_count};
use stackit_core::types::DbId;
use stackit_db::models::answer::{CreateAnswer, EditSnapshot, UpdateAnswer};
use stackit_db::repositories::{AnswerRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::policy::ensure_author_or_admin;
use crate::query::PageParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// POST /answers/{questionId}
///
/// Create an answer. A user may answer a given question only once.
pub async fn create_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
    Json(input): Json<CreateAnswer>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let question = QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }))?;

    if AnswerRepo::exists_for_author(&state.pool, question.id, auth.user_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already answered this question".into(),
        )));
    }

    let answer = AnswerRepo::create(&state.pool, auth.user_id, question.id, &input.content).await?;

    tracing::info!(
        user_id = auth.user_id,
        question_id,
        answer_id = answer.id,
        "Answer created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}

/// PUT /answers/{id}
///
/// Update an answer's content. Author or admin only. A content-changing
/// edit appends the prior revision to the edit history; an identical
/// body is a no-op.
pub async fn update_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnswer>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let answer = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;

    ensure_author_or_admin(&auth, answer.author_id)?;

    if answer.content == input.content {
        return Ok(Json(DataResponse { data: answer }));
    }

    let snapshot = EditSnapshot {
        content: answer.content.clone(),
        edited_at: Utc::now(),
    };

    let updated = AnswerRepo::record_edit(&state.pool, id, &snapshot, &input.content)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;

    tracing::info!(user_id = auth.user_id, answer_id = id, "Answer updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /answers/{id}
///
/// Delete an answer. Author or admin only. If it was the accepted
/// answer, the parent question is reset in the same transaction.
pub async fn delete_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let answer = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;

    ensure_author_or_admin(&auth, answer.author_id)?;

    AnswerRepo::delete(&state.pool, answer.id, answer.question_id, answer.is_accepted).await?;

    tracing::info!(
        user_id = auth.user_id,
        answer_id = id,
        was_accepted = answer.is_accepted,
        "Answer deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /answers/{id}/accept
///
/// Mark an answer as accepted. Question author or admin only. Any
/// previously accepted answer of the question is unmarked in the same
/// transaction.
pub async fn accept_answer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let answer = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;

    let question = QuestionRepo::find_by_id(&state.pool, answer.question_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: answer.question_id,
        }))?;

    ensure_author_or_admin(&auth, question.author_id)?;

    AnswerRepo::accept(&state.pool, answer.id, question.id).await?;

    let accepted = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        answer_id = id,
        question_id = question.id,
        "Answer accepted"
    );

    Ok(Json(DataResponse { data: accepted }))
}

/// GET /answers/question/{questionId}
///
/// List a question's answers: accepted first, then net votes
/// descending, then earliest created.
pub async fn list_by_question(
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let answers = AnswerRepo::list_by_question(&state.pool, question_id).await?;
    Ok(Json(DataResponse { data: answers }))
}

/// GET /answers/user/{userId}?pageNumber=
///
/// List a user's answers newest-first, paginated, with question titles.
pub async fn list_user_answers(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page_number);

    let total = AnswerRepo::count_by_author(&state.pool, user_id).await?;
    let answers = AnswerRepo::list_by_author(&state.pool, user_id, page).await?;

    Ok(Json(PageResponse {
        data: answers,
        page,
        pages: page_count(total),
        total,
    }))
}
