//! Repository for the `answers` table.
//!
//! Acceptance and deletion span multiple rows (the answer, its siblings,
//! the parent question, the vote ledger); both run inside a single
//! transaction so the accepted-answer invariant cannot be observed
//! half-applied.

use sqlx::types::Json;
use sqlx::PgPool;
use stackit_core::pagination::{page_offset, PAGE_SIZE};
use stackit_core::types::DbId;

use crate::models::answer::{Answer, EditSnapshot, UserAnswer};

/// Column list for answer queries, qualified with the `a`/`u` aliases
/// from [`FROM_JOINED`].
const COLUMNS: &str = "a.id, a.content, a.author_id, a.question_id, a.upvotes, a.downvotes, \
    a.is_accepted, a.is_edited, a.edited_at, a.edit_history, \
    (cardinality(a.upvotes) - cardinality(a.downvotes))::BIGINT AS vote_count, \
    u.username AS author_username, u.reputation AS author_reputation, \
    u.avatar AS author_avatar, \
    a.created_at, a.updated_at";

/// Shared FROM clause joining the author.
const FROM_JOINED: &str = "answers a JOIN users u ON u.id = a.author_id";

/// Listing order: accepted answers first, then net vote count, then
/// earliest-created. Reproduced exactly by every answer listing.
const RANKING: &str = "a.is_accepted DESC, \
    (cardinality(a.upvotes) - cardinality(a.downvotes)) DESC, \
    a.created_at ASC";

/// Provides CRUD, acceptance, and listing operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer, returning the created row with author info.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        question_id: DbId,
        content: &str,
    ) -> Result<Answer, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO answers (content, author_id, question_id)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(content)
        .bind(author_id)
        .bind(question_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find an answer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED} WHERE a.id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the given user has already answered the given question.
    pub async fn exists_for_author(
        pool: &PgPool,
        question_id: DbId,
        author_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM answers WHERE question_id = $1 AND author_id = $2)",
        )
        .bind(question_id)
        .bind(author_id)
        .fetch_one(pool)
        .await
    }

    /// List a question's answers: accepted first, then net votes
    /// descending, then earliest created.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_JOINED}
             WHERE a.question_id = $1
             ORDER BY {RANKING}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// List a user's answers newest-first, with the parent question's
    /// title. 1-indexed page, fixed page size.
    pub async fn list_by_author(
        pool: &PgPool,
        author_id: DbId,
        page: i64,
    ) -> Result<Vec<UserAnswer>, sqlx::Error> {
        sqlx::query_as::<_, UserAnswer>(
            "SELECT a.id, a.content, a.author_id, a.question_id,
                 q.title AS question_title,
                 a.is_accepted, a.is_edited,
                 (cardinality(a.upvotes) - cardinality(a.downvotes))::BIGINT AS vote_count,
                 a.created_at, a.updated_at
             FROM answers a
             JOIN questions q ON q.id = a.question_id
             WHERE a.author_id = $1
             ORDER BY a.created_at DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(author_id)
        .bind(PAGE_SIZE)
        .bind(page_offset(page))
        .fetch_all(pool)
        .await
    }

    /// Total number of answers by the given user.
    pub async fn count_by_author(pool: &PgPool, author_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM answers WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Replace the answer's content, appending the prior revision to the
    /// edit history. Returns `None` if the answer does not exist.
    pub async fn record_edit(
        pool: &PgPool,
        id: DbId,
        snapshot: &EditSnapshot,
        new_content: &str,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE answers SET
                edit_history = edit_history || $2,
                is_edited = TRUE,
                edited_at = NOW(),
                content = $3,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(Json(snapshot))
        .bind(new_content)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Mark an answer as the question's accepted answer.
    ///
    /// One transaction: clear any other accepted answer of the question,
    /// flag this one, and point the question at it. At most one answer
    /// per question ends up accepted, even under concurrent calls.
    pub async fn accept(
        pool: &PgPool,
        answer_id: DbId,
        question_id: DbId,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE answers SET is_accepted = FALSE, updated_at = NOW()
             WHERE question_id = $2 AND is_accepted = TRUE AND id <> $1",
        )
        .bind(answer_id)
        .bind(question_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE answers SET is_accepted = TRUE, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(answer_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE questions SET is_answered = TRUE, accepted_answer_id = $1, updated_at = NOW()
             WHERE id = $2",
        )
        .bind(answer_id)
        .bind(question_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// Delete an answer and its vote ledger rows. If the answer was the
    /// accepted one, the parent question is reset in the same
    /// transaction.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        question_id: DbId,
        was_accepted: bool,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if was_accepted {
            sqlx::query(
                "UPDATE questions
                 SET is_answered = FALSE, accepted_answer_id = NULL, updated_at = NOW()
                 WHERE id = $1",
            )
            .bind(question_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM votes WHERE target_type = 'answer' AND target_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
