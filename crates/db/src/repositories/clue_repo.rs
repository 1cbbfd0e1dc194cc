//! Repository for the `clues` table (reads only; clues are immutable and
//! authored out-of-band).

use questline_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::clue::Clue;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, sequence_index, title, description, clue_type, \
                       riddle_question, riddle_answer, xp_reward, coin_reward, created_at";

/// Provides read operations for clues.
pub struct ClueRepo;

impl ClueRepo {
    /// Find a clue by ID.
    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Clue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clues WHERE id = $1");
        sqlx::query_as::<_, Clue>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List an event's clues ordered by `sequence_index`.
    pub async fn list_for_event(
        exec: impl PgExecutor<'_>,
        event_id: DbId,
    ) -> Result<Vec<Clue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clues WHERE event_id = $1 ORDER BY sequence_index"
        );
        sqlx::query_as::<_, Clue>(&query)
            .bind(event_id)
            .fetch_all(exec)
            .await
    }

    /// The event's first clue (smallest `sequence_index`), if any.
    pub async fn first_in_event(
        exec: impl PgExecutor<'_>,
        event_id: DbId,
    ) -> Result<Option<Clue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clues WHERE event_id = $1 \
             ORDER BY sequence_index LIMIT 1"
        );
        sqlx::query_as::<_, Clue>(&query)
            .bind(event_id)
            .fetch_optional(exec)
            .await
    }

    /// The single clue with the smallest `sequence_index` strictly greater
    /// than `after_index` in the same event, if any.
    pub async fn next_in_event(
        exec: impl PgExecutor<'_>,
        event_id: DbId,
        after_index: i32,
    ) -> Result<Option<Clue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clues \
             WHERE event_id = $1 AND sequence_index > $2 \
             ORDER BY sequence_index LIMIT 1"
        );
        sqlx::query_as::<_, Clue>(&query)
            .bind(event_id)
            .bind(after_index)
            .fetch_optional(exec)
            .await
    }

    /// Whether an event row exists.
    pub async fn event_exists(
        exec: impl PgExecutor<'_>,
        event_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
            .bind(event_id)
            .fetch_one(exec)
            .await
    }
}
