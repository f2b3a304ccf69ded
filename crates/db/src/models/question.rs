//! Question model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stackit_core::types::{DbId, Timestamp};

/// A row from the `questions` table, joined with its author's public
/// fields. `vote_count` and `answer_count` are computed in SQL, never
/// stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author_id: DbId,
    pub upvotes: Vec<DbId>,
    pub downvotes: Vec<DbId>,
    pub views: i64,
    pub is_answered: bool,
    pub accepted_answer_id: Option<DbId>,
    pub status: String,
    pub vote_count: i64,
    pub answer_count: i64,
    pub author_username: String,
    pub author_reputation: i64,
    pub author_avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a question. Tags are normalized (trimmed,
/// lowercased) by the handler before reaching the repository.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating a question. `None` fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateQuestion {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

/// Query parameters for the question listing.
#[derive(Debug, Deserialize)]
pub struct QuestionListParams {
    pub keyword: Option<String>,
    pub tag: Option<String>,
    #[serde(rename = "pageNumber")]
    pub page_number: Option<i64>,
}
