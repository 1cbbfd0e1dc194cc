//! Shared fixtures for db integration tests.
//!
//! Clue authoring is out of scope for the backend (an admin concern), so
//! fixtures insert rows directly instead of going through a repository.

#![allow(dead_code)] // Each test binary compiles this module; not all use every helper.

use questline_core::types::DbId;
use sqlx::PgPool;

/// Insert an event and return its id.
pub async fn seed_event(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO events (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("insert event")
}

/// Insert a profile with the given coin balance and return its id.
pub async fn seed_profile(pool: &PgPool, name: &str, coins: i64) -> DbId {
    sqlx::query_scalar("INSERT INTO profiles (name, coins) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(coins)
        .fetch_one(pool)
        .await
        .expect("insert profile")
}

/// Insert a clue and return its id. `answer = None` makes a scan-type clue.
pub async fn seed_clue(
    pool: &PgPool,
    event_id: DbId,
    sequence_index: i32,
    answer: Option<&str>,
    xp_reward: i32,
    coin_reward: i32,
) -> DbId {
    let clue_type = if answer.is_some() { "riddle" } else { "scan" };
    sqlx::query_scalar(
        "INSERT INTO clues \
             (event_id, sequence_index, title, clue_type, riddle_answer, xp_reward, coin_reward) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING id",
    )
    .bind(event_id)
    .bind(sequence_index)
    .bind(format!("Clue {sequence_index}"))
    .bind(clue_type)
    .bind(answer)
    .bind(xp_reward)
    .bind(coin_reward)
    .fetch_one(pool)
    .await
    .expect("insert clue")
}
