//! Repository for the `questions` table.

use sqlx::PgPool;
use stackit_core::pagination::{page_offset, PAGE_SIZE};
use stackit_core::types::DbId;

use crate::models::question::{CreateQuestion, Question, UpdateQuestion};

/// Column list for question queries. Every read joins the author row, so
/// columns are qualified with the `q`/`u` aliases from [`FROM_JOINED`].
const COLUMNS: &str = "q.id, q.title, q.content, q.tags, q.author_id, q.upvotes, q.downvotes, \
    q.views, q.is_answered, q.accepted_answer_id, q.status, \
    (cardinality(q.upvotes) - cardinality(q.downvotes))::BIGINT AS vote_count, \
    (SELECT COUNT(*) FROM answers a WHERE a.question_id = q.id) AS answer_count, \
    u.username AS author_username, u.reputation AS author_reputation, \
    u.avatar AS author_avatar, \
    q.created_at, q.updated_at";

/// Shared FROM clause joining the author.
const FROM_JOINED: &str = "questions q JOIN users u ON u.id = q.author_id";

/// Filter shared by `list` and `count`: optional case-insensitive
/// substring match over title/content ($1) and optional exact tag
/// membership ($2).
const LIST_FILTER: &str = "($1::TEXT IS NULL \
        OR q.title ILIKE '%' || $1 || '%' \
        OR q.content ILIKE '%' || $1 || '%') \
    AND ($2::TEXT IS NULL OR $2 = ANY(q.tags))";

/// Number of questions returned by the trending and unanswered feeds.
const FEED_LIMIT: i64 = 10;

/// Provides CRUD and listing operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row with author info.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateQuestion,
        tags: &[String],
    ) -> Result<Question, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO questions (title, content, tags, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(input.title.trim())
        .bind(&input.content)
        .bind(tags)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED} WHERE q.id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Increment the view counter. Returns `false` if the question does
    /// not exist.
    pub async fn touch_views(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE questions SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List questions newest-first, optionally filtered by keyword
    /// (substring over title or content, case-insensitive) and tag
    /// (exact match). 1-indexed page, fixed page size.
    pub async fn list(
        pool: &PgPool,
        keyword: Option<&str>,
        tag: Option<&str>,
        page: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_JOINED}
             WHERE {LIST_FILTER}
             ORDER BY q.created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(keyword)
            .bind(tag)
            .bind(PAGE_SIZE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await
    }

    /// Total number of questions matching the listing filter.
    pub async fn count(
        pool: &PgPool,
        keyword: Option<&str>,
        tag: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM questions q WHERE {LIST_FILTER}");
        sqlx::query_scalar(&query)
            .bind(keyword)
            .bind(tag)
            .fetch_one(pool)
            .await
    }

    /// Top questions by views, then net vote count.
    pub async fn trending(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_JOINED}
             ORDER BY q.views DESC,
                 (cardinality(q.upvotes) - cardinality(q.downvotes)) DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(FEED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Newest questions without an accepted answer.
    pub async fn unanswered(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_JOINED}
             WHERE NOT q.is_answered
             ORDER BY q.created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(FEED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Update a question. Only non-`None` fields in `input` are applied;
    /// tags must already be normalized. Returns `None` if the question
    /// does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
        tags: Option<&[String]>,
    ) -> Result<Option<Question>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE questions SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                tags = COALESCE($4, tags),
                status = COALESCE($5, status),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.title.as_deref().map(str::trim))
        .bind(&input.content)
        .bind(tags)
        .bind(&input.status)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Delete a question together with its answers and every vote ledger
    /// row referencing the question or one of its answers, in a single
    /// transaction. Returns `false` if the question does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM votes
             WHERE target_type = 'answer'
               AND target_id IN (SELECT id FROM answers WHERE question_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM votes WHERE target_type = 'question' AND target_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM answers WHERE question_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
