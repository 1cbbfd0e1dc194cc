//! Read-only leaderboard query for an event.

use questline_core::types::DbId;
use sqlx::PgPool;

use crate::models::leaderboard::LeaderboardEntry;

/// Provides the store-side leaderboard aggregation as a single read query.
pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// Event leaderboard: one row per participant with a progress row in the
    /// event, scored by completed clue count, ties broken by cumulative XP.
    pub async fn for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT p.id AS user_id, p.name, p.avatar_url, p.level, p.total_xp, \
                    COUNT(*) FILTER (WHERE ucp.is_completed) AS score \
             FROM profiles p \
             JOIN user_clue_progress ucp ON ucp.user_id = p.id \
             JOIN clues c ON c.id = ucp.clue_id \
             WHERE c.event_id = $1 \
             GROUP BY p.id \
             ORDER BY score DESC, p.total_xp DESC",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }
}
