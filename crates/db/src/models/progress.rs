//! Per-user, per-clue progress model.

use questline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_clue_progress` table.
///
/// Rows are created lazily: the first clue of an event is implicitly
/// unlocked with no row present, and a missing row for any other clue means
/// locked. A completed row is never re-locked.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserClueProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub clue_id: DbId,
    pub is_locked: bool,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
