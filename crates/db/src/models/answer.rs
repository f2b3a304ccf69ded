//! Answer model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use stackit_core::types::{DbId, Timestamp};

/// One prior revision of an answer, captured before a content change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditSnapshot {
    pub content: String,
    pub edited_at: Timestamp,
}

/// A row from the `answers` table, joined with its author's public
/// fields. `vote_count` is computed in SQL.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: DbId,
    pub content: String,
    pub author_id: DbId,
    pub question_id: DbId,
    pub upvotes: Vec<DbId>,
    pub downvotes: Vec<DbId>,
    pub is_accepted: bool,
    pub is_edited: bool,
    pub edited_at: Option<Timestamp>,
    pub edit_history: Json<Vec<EditSnapshot>>,
    pub vote_count: i64,
    pub author_username: String,
    pub author_reputation: i64,
    pub author_avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An answer row as returned by the by-author listing, carrying the
/// parent question's title for display.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserAnswer {
    pub id: DbId,
    pub content: String,
    pub author_id: DbId,
    pub question_id: DbId,
    pub question_title: String,
    pub is_accepted: bool,
    pub is_edited: bool,
    pub vote_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an answer.
#[derive(Debug, Deserialize)]
pub struct CreateAnswer {
    pub content: String,
}

/// DTO for updating an answer. Content is required; the handler decides
/// whether the change warrants an edit-history snapshot.
#[derive(Debug, Deserialize)]
pub struct UpdateAnswer {
    pub content: String,
}
