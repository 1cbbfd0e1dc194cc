//! Clue progression transitions: complete, skip, start, and the per-user
//! clue view.
//!
//! Each mutating operation runs as one transaction so that the completion
//! flip, the next-clue unlock, and the reward grant are never observable as
//! partially applied. The progression engine operates with trusted access:
//! it may read and unlock clues the user cannot yet view, authorization
//! having been enforced once at the API boundary.

use std::collections::HashMap;

use questline_core::progression;
use questline_core::types::DbId;
use sqlx::PgPool;

use crate::models::clue::ClueView;
use crate::models::profile::Profile;
use crate::repositories::{ClueRepo, ProfileRepo, ProgressRepo};

/// Result of a clue completion attempt.
#[derive(Debug)]
pub enum CompletionOutcome {
    /// First completion: rewards granted, next clue (if any) unlocked.
    Completed {
        profile: Profile,
        unlocked_clue_id: Option<DbId>,
    },
    /// The clue was already completed. Safe no-op; no reward granted.
    AlreadyCompleted,
    /// Submitted answer did not match. Nothing changed.
    IncorrectAnswer,
    ClueNotFound,
    ProfileNotFound,
}

/// Result of a clue skip.
#[derive(Debug)]
pub enum SkipOutcome {
    /// Clue marked completed without rewards; next clue (if any) unlocked.
    Skipped { unlocked_clue_id: Option<DbId> },
    ClueNotFound,
}

/// Result of starting an event for a user.
#[derive(Debug)]
pub enum StartOutcome {
    /// The event's first clue is now materialized as unlocked.
    Started { first_clue_id: DbId },
    /// The event does not exist or has no clues.
    NoClues,
}

/// Drives a user's unlock/completion state across an event's clue chain.
pub struct ProgressionRepo;

impl ProgressionRepo {
    /// Complete a clue: verify the answer, flip the progress row, unlock the
    /// next clue in the chain, and grant the clue's rewards, all in one
    /// transaction.
    ///
    /// Re-completing an already-completed clue returns
    /// [`CompletionOutcome::AlreadyCompleted`] without touching the profile,
    /// so retried and concurrent requests grant at most once.
    pub async fn complete_clue(
        pool: &PgPool,
        user_id: DbId,
        clue_id: DbId,
        answer: Option<&str>,
    ) -> Result<CompletionOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(clue) = ClueRepo::find_by_id(&mut *tx, clue_id).await? else {
            tx.rollback().await?;
            return Ok(CompletionOutcome::ClueNotFound);
        };

        if !progression::answer_accepted(clue.riddle_answer.as_deref(), answer) {
            tx.rollback().await?;
            return Ok(CompletionOutcome::IncorrectAnswer);
        }

        // Lock the profile up front: it serializes concurrent completions by
        // the same user and guarantees the reward target exists before any
        // progress row is written.
        if ProfileRepo::lock_for_update(&mut *tx, user_id).await?.is_none() {
            tx.rollback().await?;
            return Ok(CompletionOutcome::ProfileNotFound);
        }

        let first_completion = ProgressRepo::mark_completed(&mut *tx, user_id, clue_id).await?;
        if !first_completion {
            tx.rollback().await?;
            return Ok(CompletionOutcome::AlreadyCompleted);
        }

        let next = ClueRepo::next_in_event(&mut *tx, clue.event_id, clue.sequence_index).await?;
        let mut unlocked_clue_id = None;
        if let Some(next) = &next {
            ProgressRepo::unlock(&mut *tx, user_id, next.id).await?;
            unlocked_clue_id = Some(next.id);
        }

        let Some(profile) = ProfileRepo::apply_reward(
            &mut *tx,
            user_id,
            i64::from(clue.xp_reward),
            i64::from(clue.coin_reward),
        )
        .await?
        else {
            // Unreachable in practice: the profile row is locked above.
            tx.rollback().await?;
            return Ok(CompletionOutcome::ProfileNotFound);
        };

        tx.commit().await?;

        tracing::info!(
            user_id,
            clue_id,
            xp_reward = clue.xp_reward,
            coin_reward = clue.coin_reward,
            ?unlocked_clue_id,
            "Clue completed",
        );

        Ok(CompletionOutcome::Completed {
            profile,
            unlocked_clue_id,
        })
    }

    /// Skip a clue: mark it completed and unlock the next clue exactly as a
    /// completion would, but grant no rewards and check no answer.
    pub async fn skip_clue(
        pool: &PgPool,
        user_id: DbId,
        clue_id: DbId,
    ) -> Result<SkipOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(clue) = ClueRepo::find_by_id(&mut *tx, clue_id).await? else {
            tx.rollback().await?;
            return Ok(SkipOutcome::ClueNotFound);
        };

        // Idempotent: a second skip changes nothing but still reports success.
        ProgressRepo::mark_completed(&mut *tx, user_id, clue_id).await?;

        let next = ClueRepo::next_in_event(&mut *tx, clue.event_id, clue.sequence_index).await?;
        let mut unlocked_clue_id = None;
        if let Some(next) = &next {
            ProgressRepo::unlock(&mut *tx, user_id, next.id).await?;
            unlocked_clue_id = Some(next.id);
        }

        tx.commit().await?;

        tracing::info!(user_id, clue_id, ?unlocked_clue_id, "Clue skipped");

        Ok(SkipOutcome::Skipped { unlocked_clue_id })
    }

    /// Start an event for a user by materializing the implicit unlock of its
    /// first clue as a progress row. Idempotent.
    pub async fn start_event(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<StartOutcome, sqlx::Error> {
        let Some(first) = ClueRepo::first_in_event(pool, event_id).await? else {
            return Ok(StartOutcome::NoClues);
        };

        ProgressRepo::unlock(pool, user_id, first.id).await?;

        tracing::info!(user_id, event_id, first_clue_id = first.id, "Event started");

        Ok(StartOutcome::Started {
            first_clue_id: first.id,
        })
    }

    /// Every clue of an event ordered by `sequence_index`, annotated with the
    /// user's completion/lock state. Pure read.
    ///
    /// Clues with no progress row fall back to the default state: unlocked
    /// for `sequence_index == 0`, locked otherwise. Returns `None` when the
    /// event does not exist.
    pub async fn clue_view(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<Vec<ClueView>>, sqlx::Error> {
        if !ClueRepo::event_exists(pool, event_id).await? {
            return Ok(None);
        }

        let clues = ClueRepo::list_for_event(pool, event_id).await?;
        let progress = ProgressRepo::list_for_event(pool, user_id, event_id).await?;
        let by_clue: HashMap<DbId, _> = progress.into_iter().map(|p| (p.clue_id, p)).collect();

        let views = clues
            .into_iter()
            .map(|clue| match by_clue.get(&clue.id) {
                Some(p) => {
                    let (is_completed, is_locked) = (p.is_completed, p.is_locked);
                    ClueView::from_clue(clue, is_completed, is_locked)
                }
                None => {
                    let is_locked = progression::locked_by_default(clue.sequence_index);
                    ClueView::from_clue(clue, false, is_locked)
                }
            })
            .collect();

        Ok(Some(views))
    }
}
