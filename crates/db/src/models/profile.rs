//! Player profile model.

use questline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `profiles` table.
///
/// XP, level, profession, and coins are mutated only by the reward ledger
/// and the sabotage path; everything else reads the profile for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    /// Equals the user id.
    pub id: DbId,
    pub name: String,
    pub avatar_url: Option<String>,
    /// Progress within the current level, `0 <= experience < level * 100`.
    pub experience: i64,
    /// Cumulative XP, monotonically non-decreasing.
    pub total_xp: i64,
    pub level: i32,
    /// One of the standard ranks, or a manually assigned custom value.
    pub profession: String,
    pub coins: i64,
    /// `normal` or `frozen`. Set by sabotage; interpreted by readers.
    pub status: String,
    pub frozen_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
