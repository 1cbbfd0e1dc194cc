//! Reward ledger math: leveling, profession ranks, and coin accrual.
//!
//! Everything here is a pure function of a profile snapshot plus the deltas
//! from a completed clue. The only side effect (persisting the result) is
//! `ProfileRepo::apply_reward` in `questline-db`, which calls [`grant`]
//! inside a row-locking transaction.

// ---------------------------------------------------------------------------
// Thresholds and rank bands
// ---------------------------------------------------------------------------

/// XP required to advance from `level` to `level + 1`.
pub fn xp_threshold(level: i32) -> i64 {
    i64::from(level) * 100
}

/// The fixed ordered rank list. A profession outside this list is a manual
/// override and is never recomputed.
pub const STANDARD_RANKS: [&str; 5] = ["Novice", "Apprentice", "Explorer", "Master", "Legend"];

/// Ascending `(exclusive upper level bound, rank)` bands. Levels at or past
/// the last bound map to [`TOP_RANK`].
const RANK_BANDS: [(i32, &str); 4] = [
    (5, "Novice"),
    (10, "Apprentice"),
    (20, "Explorer"),
    (50, "Master"),
];

/// Rank for levels beyond every band.
const TOP_RANK: &str = "Legend";

// ---------------------------------------------------------------------------
// Level derivation
// ---------------------------------------------------------------------------

/// Level and within-level experience derived from cumulative XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    /// Current level, >= 1.
    pub level: i32,
    /// Progress toward the next level, `0 <= experience < xp_threshold(level)`.
    pub experience: i64,
}

/// Derive level and remaining experience from cumulative XP.
///
/// Starting at level 1, repeatedly subtracts `xp_threshold(level)` from the
/// working remainder while it still covers the threshold. Terminates because
/// thresholds grow without bound while the remainder strictly decreases.
pub fn level_from_total_xp(total_xp: i64) -> LevelProgress {
    let mut level = 1;
    let mut remainder = total_xp.max(0);

    while remainder >= xp_threshold(level) {
        remainder -= xp_threshold(level);
        level += 1;
    }

    LevelProgress {
        level,
        experience: remainder,
    }
}

// ---------------------------------------------------------------------------
// Profession derivation
// ---------------------------------------------------------------------------

/// The standard rank for a given level.
pub fn rank_for_level(level: i32) -> &'static str {
    for (bound, rank) in RANK_BANDS {
        if level < bound {
            return rank;
        }
    }
    TOP_RANK
}

/// Whether a profession value is one of the standard ranks (as opposed to a
/// manually assigned custom value).
pub fn is_standard_rank(profession: &str) -> bool {
    STANDARD_RANKS.contains(&profession)
}

/// Recompute the profession for a new level.
///
/// A custom (non-standard) profession is a manual override and is returned
/// unchanged.
pub fn recompute_profession<'a>(current: &'a str, level: i32) -> &'a str {
    if is_standard_rank(current) {
        rank_for_level(level)
    } else {
        current
    }
}

// ---------------------------------------------------------------------------
// Grant
// ---------------------------------------------------------------------------

/// The profile fields the reward ledger reads.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub total_xp: i64,
    pub coins: i64,
    pub profession: String,
}

/// The profile fields the reward ledger writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardOutcome {
    pub experience: i64,
    pub total_xp: i64,
    pub level: i32,
    pub profession: String,
    pub coins: i64,
}

/// Compute the new profile state after granting a clue's rewards.
pub fn grant(snapshot: &ProfileSnapshot, xp_delta: i64, coin_delta: i64) -> RewardOutcome {
    let total_xp = snapshot.total_xp + xp_delta;
    let progress = level_from_total_xp(total_xp);
    let profession = recompute_profession(&snapshot.profession, progress.level).to_string();

    RewardOutcome {
        experience: progress.experience,
        total_xp,
        level: progress.level,
        profession,
        coins: snapshot.coins + coin_delta,
    }
}
