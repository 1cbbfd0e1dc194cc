//! Clue models and the per-user clue view DTO.

use questline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `clues` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Clue {
    pub id: DbId,
    pub event_id: DbId,
    /// Zero-based position within the event's clue chain, unique per event.
    pub sequence_index: i32,
    pub title: String,
    pub description: Option<String>,
    /// `riddle` (answer-checked) or `scan` (completes without an answer).
    pub clue_type: String,
    pub riddle_question: Option<String>,
    /// Expected answer for riddle clues. Never exposed in [`ClueView`].
    pub riddle_answer: Option<String>,
    pub xp_reward: i32,
    pub coin_reward: i32,
    pub created_at: Timestamp,
}

/// A clue annotated with one user's progress, as returned by the clue view.
///
/// Deliberately omits `riddle_answer` so the answer never reaches a client.
#[derive(Debug, Clone, Serialize)]
pub struct ClueView {
    pub id: DbId,
    pub event_id: DbId,
    pub sequence_index: i32,
    pub title: String,
    pub description: Option<String>,
    pub clue_type: String,
    pub riddle_question: Option<String>,
    pub xp_reward: i32,
    pub coin_reward: i32,
    pub is_completed: bool,
    pub is_locked: bool,
}

impl ClueView {
    /// Annotate a clue with a user's completion/lock state.
    pub fn from_clue(clue: Clue, is_completed: bool, is_locked: bool) -> Self {
        Self {
            id: clue.id,
            event_id: clue.event_id,
            sequence_index: clue.sequence_index,
            title: clue.title,
            description: clue.description,
            clue_type: clue.clue_type,
            riddle_question: clue.riddle_question,
            xp_reward: clue.xp_reward,
            coin_reward: clue.coin_reward,
            is_completed,
            is_locked,
        }
    }
}
