//! Integration tests for the sabotage transaction: funds check, atomic
//! debit, and the target freeze window.

mod common;

use assert_matches::assert_matches;
use common::seed_profile;
use questline_core::sabotage::SABOTAGE_COST;
use questline_db::models::profile::Profile;
use questline_db::repositories::{ProfileRepo, SabotageOutcome};
use sqlx::PgPool;

async fn profile(pool: &PgPool, id: i64) -> Profile {
    ProfileRepo::find_by_id(pool, id)
        .await
        .expect("query profile")
        .expect("profile exists")
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insufficient_funds_leaves_both_profiles_unchanged(pool: PgPool) {
    let actor = seed_profile(&pool, "ada", 40).await;
    let target = seed_profile(&pool, "brendan", 200).await;

    let outcome = ProfileRepo::sabotage(&pool, actor, target).await.unwrap();
    assert_matches!(outcome, SabotageOutcome::InsufficientFunds { available: 40 });

    let a = profile(&pool, actor).await;
    assert_eq!(a.coins, 40);

    let t = profile(&pool, target).await;
    assert_eq!(t.coins, 200);
    assert_eq!(t.status, "normal");
    assert!(t.frozen_until.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sabotage_debits_cost_and_freezes_target(pool: PgPool) {
    let actor = seed_profile(&pool, "ada", 100).await;
    let target = seed_profile(&pool, "brendan", 0).await;

    let before = chrono::Utc::now();
    let outcome = ProfileRepo::sabotage(&pool, actor, target).await.unwrap();

    let SabotageOutcome::Sabotaged {
        actor: updated,
        frozen_until,
    } = outcome
    else {
        panic!("expected sabotage to succeed");
    };
    assert_eq!(updated.coins, 100 - SABOTAGE_COST);

    let t = profile(&pool, target).await;
    assert_eq!(t.status, "frozen");
    assert_eq!(t.frozen_until, Some(frozen_until));

    // frozen_until ~ now + 5 minutes, with a few seconds of tolerance.
    let expected = before + chrono::Duration::minutes(5);
    let drift = (frozen_until - expected).num_seconds().abs();
    assert!(drift < 5, "freeze deadline drifted by {drift}s");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn a_new_freeze_overwrites_the_prior_window(pool: PgPool) {
    let actor = seed_profile(&pool, "ada", 200).await;
    let target = seed_profile(&pool, "brendan", 0).await;

    let first = ProfileRepo::sabotage(&pool, actor, target).await.unwrap();
    let SabotageOutcome::Sabotaged {
        frozen_until: first_deadline,
        ..
    } = first
    else {
        panic!("expected first sabotage to succeed");
    };

    let second = ProfileRepo::sabotage(&pool, actor, target).await.unwrap();
    let SabotageOutcome::Sabotaged {
        frozen_until: second_deadline,
        ..
    } = second
    else {
        panic!("expected second sabotage to succeed");
    };

    assert!(second_deadline >= first_deadline);

    let t = profile(&pool, target).await;
    assert_eq!(t.frozen_until, Some(second_deadline));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn self_sabotage_is_rejected(pool: PgPool) {
    let actor = seed_profile(&pool, "ada", 100).await;

    let outcome = ProfileRepo::sabotage(&pool, actor, actor).await.unwrap();
    assert_matches!(outcome, SabotageOutcome::SelfSabotage);

    let a = profile(&pool, actor).await;
    assert_eq!(a.coins, 100);
    assert_eq!(a.status, "normal");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_target_rolls_back_the_debit(pool: PgPool) {
    let actor = seed_profile(&pool, "ada", 100).await;

    let outcome = ProfileRepo::sabotage(&pool, actor, actor + 1000).await.unwrap();
    assert_matches!(outcome, SabotageOutcome::TargetNotFound);

    let a = profile(&pool, actor).await;
    assert_eq!(a.coins, 100, "debit must roll back with the failed freeze");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_actor_is_reported(pool: PgPool) {
    let target = seed_profile(&pool, "brendan", 0).await;

    let outcome = ProfileRepo::sabotage(&pool, target + 1000, target)
        .await
        .unwrap();

    assert_matches!(outcome, SabotageOutcome::ActorNotFound);
}

/// Two concurrent sabotages by an actor holding funds for only one must not
/// drive the balance negative: the row lock serializes the funds check.
#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_sabotage_cannot_overdraw(pool: PgPool) {
    let actor = seed_profile(&pool, "ada", 60).await;
    let target = seed_profile(&pool, "brendan", 0).await;

    let mut handles = Vec::new();
    for _ in 0..2 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            ProfileRepo::sabotage(&pool, actor, target).await
        }));
    }

    let mut succeeded = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            SabotageOutcome::Sabotaged { .. } => succeeded += 1,
            SabotageOutcome::InsufficientFunds { .. } => rejected += 1,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
    assert_eq!(succeeded, 1);
    assert_eq!(rejected, 1);

    let a = profile(&pool, actor).await;
    assert_eq!(a.coins, 10);
}
