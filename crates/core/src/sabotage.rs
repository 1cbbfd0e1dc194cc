//! Sabotage rules: coin cost and freeze window.

use crate::types::Timestamp;

/// Coins debited from the acting player per sabotage.
pub const SABOTAGE_COST: i64 = 50;

/// Length of the freeze applied to the target, in minutes.
pub const FREEZE_MINUTES: i64 = 5;

/// Profile status while a freeze window is active.
pub const STATUS_FROZEN: &str = "frozen";

/// Profile status outside any freeze window.
pub const STATUS_NORMAL: &str = "normal";

/// Deadline of a freeze starting at `now`.
///
/// A new sabotage overwrites any prior freeze window rather than extending it.
pub fn freeze_deadline(now: Timestamp) -> Timestamp {
    now + chrono::Duration::minutes(FREEZE_MINUTES)
}
