//! Repository for the `votes` ledger.
//!
//! Every cast mutates the ledger and the target's denormalized
//! upvote/downvote arrays inside one transaction, with the existing
//! ledger row locked `FOR UPDATE`. A failure anywhere rolls back both
//! writes, so the two representations cannot drift apart.

use sqlx::{PgPool, Postgres, Transaction};
use stackit_core::types::DbId;
use stackit_core::votes::{VoteOutcome, VoteTarget, VoteType};

use crate::models::vote::Vote;

const COLUMNS: &str = "id, user_id, target_type, target_id, vote_type, created_at, updated_at";

/// Provides ledger operations and the cast-vote state machine.
pub struct VoteRepo;

impl VoteRepo {
    /// The caller's vote history, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Vote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Cast a vote on a target: create on first vote, remove on repeat of
    /// the same direction, flip on the opposite direction.
    ///
    /// Returns the outcome and the target's net vote count after the
    /// mutation. The target row itself must already be known to exist;
    /// author checks happen in the handler.
    pub async fn cast(
        pool: &PgPool,
        target: VoteTarget,
        target_id: DbId,
        user_id: DbId,
        vote_type: VoteType,
    ) -> Result<(VoteOutcome, i64), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM votes
             WHERE user_id = $1 AND target_type = $2 AND target_id = $3
             FOR UPDATE"
        );
        let existing = sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(target.as_str())
            .bind(target_id)
            .fetch_optional(&mut *tx)
            .await?;

        let outcome = match existing {
            None => {
                sqlx::query(
                    "INSERT INTO votes (user_id, target_type, target_id, vote_type)
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(user_id)
                .bind(target.as_str())
                .bind(target_id)
                .bind(vote_type.as_str())
                .execute(&mut *tx)
                .await?;

                Self::cache_add(&mut tx, target, target_id, user_id, vote_type).await?;
                VoteOutcome::Added
            }
            Some(vote) if vote.vote_type == vote_type.as_str() => {
                sqlx::query("DELETE FROM votes WHERE id = $1")
                    .bind(vote.id)
                    .execute(&mut *tx)
                    .await?;

                Self::cache_remove(&mut tx, target, target_id, user_id, vote_type).await?;
                VoteOutcome::Removed
            }
            Some(vote) => {
                sqlx::query("UPDATE votes SET vote_type = $2, updated_at = NOW() WHERE id = $1")
                    .bind(vote.id)
                    .bind(vote_type.as_str())
                    .execute(&mut *tx)
                    .await?;

                Self::cache_flip(&mut tx, target, target_id, user_id, vote_type).await?;
                VoteOutcome::Updated
            }
        };

        let vote_count: i64 = sqlx::query_scalar(&format!(
            "SELECT (cardinality(upvotes) - cardinality(downvotes))::BIGINT
             FROM {} WHERE id = $1",
            target.table()
        ))
        .bind(target_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            user_id,
            target_type = target.as_str(),
            target_id,
            vote_type = vote_type.as_str(),
            ?outcome,
            "Vote cast"
        );

        Ok((outcome, vote_count))
    }

    /// Add the user to the direction's array on the target. The
    /// remove-then-append keeps the array a set even if the same id were
    /// ever replayed.
    async fn cache_add(
        tx: &mut Transaction<'_, Postgres>,
        target: VoteTarget,
        target_id: DbId,
        user_id: DbId,
        vote_type: VoteType,
    ) -> Result<(), sqlx::Error> {
        let column = vote_type.cache_column();
        let query = format!(
            "UPDATE {table} SET {column} = array_append(array_remove({column}, $2), $2)
             WHERE id = $1",
            table = target.table()
        );
        sqlx::query(&query)
            .bind(target_id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Remove the user from the direction's array on the target.
    async fn cache_remove(
        tx: &mut Transaction<'_, Postgres>,
        target: VoteTarget,
        target_id: DbId,
        user_id: DbId,
        vote_type: VoteType,
    ) -> Result<(), sqlx::Error> {
        let column = vote_type.cache_column();
        let query = format!(
            "UPDATE {table} SET {column} = array_remove({column}, $2)
             WHERE id = $1",
            table = target.table()
        );
        sqlx::query(&query)
            .bind(target_id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Move the user from the opposite direction's array to the new one,
    /// in a single statement.
    async fn cache_flip(
        tx: &mut Transaction<'_, Postgres>,
        target: VoteTarget,
        target_id: DbId,
        user_id: DbId,
        vote_type: VoteType,
    ) -> Result<(), sqlx::Error> {
        let new_column = vote_type.cache_column();
        let old_column = vote_type.opposite().cache_column();
        let query = format!(
            "UPDATE {table} SET
                {new_column} = array_append(array_remove({new_column}, $2), $2),
                {old_column} = array_remove({old_column}, $2)
             WHERE id = $1",
            table = target.table()
        );
        sqlx::query(&query)
            .bind(target_id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
