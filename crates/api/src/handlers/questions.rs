//! Handlers for the `/questions` resource.
//!
//! Listing/search/pagination, trending and unanswered feeds, the detail
//! fetch (which increments the view counter), and author/admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use stackit_core::error::CoreError;
use stackit_core::pagination::{clamp_page, page_count};
use stackit_core::questions::{normalize_tags, validate_content, validate_status, validate_title};
use stackit_core::types::DbId;
use stackit_db::models::answer::Answer;
use stackit_db::models::question::{
    CreateQuestion, Question, QuestionListParams, UpdateQuestion,
};
use stackit_db::repositories::{AnswerRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::policy::ensure_author_or_admin;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// A question together with its answers, as returned by the detail
/// endpoint.
#[derive(Debug, Serialize)]
pub struct QuestionDetail {
    pub question: Question,
    pub answers: Vec<Answer>,
}

/// GET /questions?keyword=&tag=&pageNumber=
///
/// List questions newest-first with optional keyword/tag filters.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page_number);
    let keyword = params.keyword.as_deref().filter(|k| !k.is_empty());
    let tag = params.tag.as_deref().filter(|t| !t.is_empty());

    let total = QuestionRepo::count(&state.pool, keyword, tag).await?;
    let questions = QuestionRepo::list(&state.pool, keyword, tag, page).await?;

    Ok(Json(PageResponse {
        data: questions,
        page,
        pages: page_count(total),
        total,
    }))
}

/// GET /questions/trending
///
/// Top 10 questions by views, then net vote count.
pub async fn trending_questions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::trending(&state.pool).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// GET /questions/unanswered
///
/// Newest 10 questions without an accepted answer.
pub async fn unanswered_questions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::unanswered(&state.pool).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// GET /questions/{id}
///
/// Fetch a question with its answers, incrementing the view counter by
/// exactly one. Answers come back accepted-first, then by net votes,
/// then oldest first.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let touched = QuestionRepo::touch_views(&state.pool, id).await?;
    if !touched {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    let answers = AnswerRepo::list_by_question(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: QuestionDetail { question, answers },
    }))
}

/// POST /questions
///
/// Create a question. Tags are trimmed and lowercased.
pub async fn create_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    validate_content(&input.content).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    let tags = normalize_tags(input.tags.clone());

    let question = QuestionRepo::create(&state.pool, auth.user_id, &input, &tags).await?;

    tracing::info!(
        user_id = auth.user_id,
        question_id = question.id,
        "Question created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// PUT /questions/{id}
///
/// Update a question's title/content/tags/status. Author or admin only.
pub async fn update_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuestion>,
) -> AppResult<impl IntoResponse> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    ensure_author_or_admin(&auth, question.author_id)?;

    if let Some(ref title) = input.title {
        validate_title(title).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }
    if let Some(ref content) = input.content {
        validate_content(content).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }
    if let Some(ref status) = input.status {
        validate_status(status).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }
    let tags = input.tags.clone().map(normalize_tags);

    let updated = QuestionRepo::update(&state.pool, id, &input, tags.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    tracing::info!(user_id = auth.user_id, question_id = id, "Question updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /questions/{id}
///
/// Delete a question, cascading to its answers and vote ledger rows.
/// Author or admin only.
pub async fn delete_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    ensure_author_or_admin(&auth, question.author_id)?;

    QuestionRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = auth.user_id, question_id = id, "Question deleted");

    Ok(StatusCode::NO_CONTENT)
}
