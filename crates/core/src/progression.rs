//! Clue progression rules.
//!
//! A (user, clue) pair is in one of three states: locked, unlocked, or
//! completed. The first clue of an event is implicitly unlocked even with no
//! progress row; every other clue is locked until the preceding clue's
//! completion unlocks it. The transactional transitions live in
//! `questline-db`; this module holds the pure rules they apply.

/// Default lock state for a clue with no progress row.
///
/// Only the first clue of an event (`sequence_index == 0`) starts unlocked.
pub fn locked_by_default(sequence_index: i32) -> bool {
    sequence_index != 0
}

/// Whether a submitted answer completes an answer-checked clue.
///
/// Comparison is case-insensitive and untrimmed. A clue with no (or an
/// empty) expected answer accepts anything, and a missing submission is
/// accepted even for answer-checked clues: scan-type clues submit nothing.
pub fn answer_accepted(expected: Option<&str>, submitted: Option<&str>) -> bool {
    match (expected, submitted) {
        (Some(expected), Some(submitted)) if !expected.is_empty() => {
            expected.to_lowercase() == submitted.to_lowercase()
        }
        _ => true,
    }
}
