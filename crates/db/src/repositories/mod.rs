//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads and
//! single-row writes accept `impl sqlx::PgExecutor<'_>` so they run against
//! the pool or inside a transaction; the multi-step game transitions
//! (`ProgressionRepo`, `ProfileRepo::sabotage`) each own a single
//! transaction, per the atomicity requirement on every read-then-write.

pub mod clue_repo;
pub mod leaderboard_repo;
pub mod profile_repo;
pub mod progression_repo;
pub mod progress_repo;

pub use clue_repo::ClueRepo;
pub use leaderboard_repo::LeaderboardRepo;
pub use profile_repo::{ProfileRepo, SabotageOutcome};
pub use progress_repo::ProgressRepo;
pub use progression_repo::{CompletionOutcome, ProgressionRepo, SkipOutcome, StartOutcome};
