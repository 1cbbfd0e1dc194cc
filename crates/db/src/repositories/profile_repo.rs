//! Repository for the `profiles` table: reads, the reward ledger write, and
//! the sabotage transaction.

use questline_core::rewards::{self, ProfileSnapshot};
use questline_core::sabotage::{self, SABOTAGE_COST, STATUS_FROZEN};
use questline_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::profile::Profile;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, avatar_url, experience, total_xp, level, profession, \
                       coins, status, frozen_until, created_at, updated_at";

/// Result of a sabotage attempt. Domain rejections are outcomes, not errors,
/// so the caller can map each to its own response.
#[derive(Debug)]
pub enum SabotageOutcome {
    /// Cost debited and target frozen. Carries the actor's updated profile.
    Sabotaged {
        actor: Profile,
        frozen_until: Timestamp,
    },
    /// Actor and target are the same user.
    SelfSabotage,
    /// Actor's balance is below the sabotage cost. Nothing changed.
    InsufficientFunds { available: i64 },
    ActorNotFound,
    TargetNotFound,
}

/// Provides operations for player profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by user ID.
    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Read a profile under a row lock (`SELECT ... FOR UPDATE`).
    ///
    /// Must run inside a transaction; the lock serializes concurrent
    /// read-compute-write cycles on the same profile.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Apply a clue's rewards to a profile: recompute XP, level, profession,
    /// and coins from the locked row and persist the result as one UPDATE.
    ///
    /// Runs on the caller's transaction connection so the grant commits or
    /// rolls back together with the completion that authorized it. Returns
    /// `None` if the profile does not exist.
    pub async fn apply_reward(
        conn: &mut PgConnection,
        user_id: DbId,
        xp_delta: i64,
        coin_delta: i64,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let Some(current) = Self::lock_for_update(conn, user_id).await? else {
            return Ok(None);
        };

        let outcome = rewards::grant(
            &ProfileSnapshot {
                total_xp: current.total_xp,
                coins: current.coins,
                profession: current.profession,
            },
            xp_delta,
            coin_delta,
        );

        let query = format!(
            "UPDATE profiles SET \
                experience = $2, \
                total_xp = $3, \
                level = $4, \
                profession = $5, \
                coins = $6, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(outcome.experience)
            .bind(outcome.total_xp)
            .bind(outcome.level)
            .bind(&outcome.profession)
            .bind(outcome.coins)
            .fetch_one(&mut *conn)
            .await?;
        Ok(Some(updated))
    }

    /// Sabotage a rival: debit [`SABOTAGE_COST`] from the actor and freeze
    /// the target for the configured window.
    ///
    /// The funds check, the debit, and the freeze run in one transaction
    /// with the actor's row locked, so concurrent attempts by the same actor
    /// cannot both pass the check against a stale balance. A missing target
    /// rolls the debit back. A new freeze overwrites any prior window.
    pub async fn sabotage(
        pool: &PgPool,
        actor_id: DbId,
        target_id: DbId,
    ) -> Result<SabotageOutcome, sqlx::Error> {
        if actor_id == target_id {
            return Ok(SabotageOutcome::SelfSabotage);
        }

        let mut tx = pool.begin().await?;

        let Some(actor) = Self::lock_for_update(&mut *tx, actor_id).await? else {
            tx.rollback().await?;
            return Ok(SabotageOutcome::ActorNotFound);
        };
        if actor.coins < SABOTAGE_COST {
            tx.rollback().await?;
            return Ok(SabotageOutcome::InsufficientFunds {
                available: actor.coins,
            });
        }

        let query = format!(
            "UPDATE profiles SET coins = coins - $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let actor = sqlx::query_as::<_, Profile>(&query)
            .bind(actor_id)
            .bind(SABOTAGE_COST)
            .fetch_one(&mut *tx)
            .await?;

        let frozen_until = sabotage::freeze_deadline(chrono::Utc::now());
        let frozen = sqlx::query(
            "UPDATE profiles SET status = $2, frozen_until = $3, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(target_id)
        .bind(STATUS_FROZEN)
        .bind(frozen_until)
        .execute(&mut *tx)
        .await?;
        if frozen.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(SabotageOutcome::TargetNotFound);
        }

        tx.commit().await?;

        tracing::info!(
            actor_id,
            target_id,
            frozen_until = %frozen_until,
            "Rival sabotaged",
        );

        Ok(SabotageOutcome::Sabotaged {
            actor,
            frozen_until,
        })
    }
}
