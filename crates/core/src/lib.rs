//! Questline core domain logic.
//!
//! Pure game rules with no I/O: leveling and profession math for the reward
//! ledger, clue progression rules (answer acceptance, default lock state),
//! and sabotage constants. The `questline-db` crate applies these rules
//! inside database transactions; the `questline-api` crate exposes them over
//! HTTP.

pub mod error;
pub mod progression;
pub mod rewards;
pub mod sabotage;
pub mod types;
