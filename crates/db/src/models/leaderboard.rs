//! Leaderboard read model.

use questline_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One leaderboard row for an event: a participant's display fields plus
/// their completed-clue count. Produced by a single read-only query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: DbId,
    pub name: String,
    pub avatar_url: Option<String>,
    pub level: i32,
    pub total_xp: i64,
    /// Number of clues this user has completed in the event.
    pub score: i64,
}
