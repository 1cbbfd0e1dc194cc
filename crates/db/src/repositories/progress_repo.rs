//! Repository for the `user_clue_progress` table.

use questline_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::progress::UserClueProgress;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, clue_id, is_locked, is_completed, completed_at, created_at, updated_at";

/// Provides operations for per-user clue progress rows.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Find the progress row for a (user, clue) pair.
    pub async fn find(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        clue_id: DbId,
    ) -> Result<Option<UserClueProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_clue_progress WHERE user_id = $1 AND clue_id = $2"
        );
        sqlx::query_as::<_, UserClueProgress>(&query)
            .bind(user_id)
            .bind(clue_id)
            .fetch_optional(exec)
            .await
    }

    /// List a user's progress rows for one event's clues.
    pub async fn list_for_event(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Vec<UserClueProgress>, sqlx::Error> {
        let query = format!(
            "SELECT p.id, p.user_id, p.clue_id, p.is_locked, p.is_completed, \
                    p.completed_at, p.created_at, p.updated_at \
             FROM user_clue_progress p \
             JOIN clues c ON c.id = p.clue_id \
             WHERE p.user_id = $1 AND c.event_id = $2"
        );
        sqlx::query_as::<_, UserClueProgress>(&query)
            .bind(user_id)
            .bind(event_id)
            .fetch_all(exec)
            .await
    }

    /// Flip a (user, clue) pair to completed, stamping `completed_at`.
    ///
    /// Conditional insert-or-update: fires only when the row does not exist
    /// or is not yet completed. Returns `true` on that first transition and
    /// `false` when the clue was already completed, which is the single
    /// authorization point for granting rewards: duplicate or concurrent
    /// completions get `false` and must not grant again.
    pub async fn mark_completed(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        clue_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_clue_progress (user_id, clue_id, is_locked, is_completed, completed_at) \
             VALUES ($1, $2, FALSE, TRUE, NOW()) \
             ON CONFLICT (user_id, clue_id) DO UPDATE SET \
                 is_completed = TRUE, \
                 is_locked = FALSE, \
                 completed_at = NOW(), \
                 updated_at = NOW() \
             WHERE user_clue_progress.is_completed = FALSE",
        )
        .bind(user_id)
        .bind(clue_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unlock a clue for a user: update the row if it exists, insert it
    /// otherwise. Never touches `is_completed`, so a completed clue stays
    /// completed (and is never re-locked).
    pub async fn unlock(
        exec: impl PgExecutor<'_>,
        user_id: DbId,
        clue_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_clue_progress (user_id, clue_id, is_locked, is_completed) \
             VALUES ($1, $2, FALSE, FALSE) \
             ON CONFLICT (user_id, clue_id) DO UPDATE SET \
                 is_locked = FALSE, \
                 updated_at = NOW()",
        )
        .bind(user_id)
        .bind(clue_id)
        .execute(exec)
        .await?;
        Ok(())
    }
}
