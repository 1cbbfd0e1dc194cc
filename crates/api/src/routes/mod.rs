pub mod game;
pub mod health;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /game/events/{event_id}/clues           clue view with caller progress (GET)
/// /game/events/{event_id}/start           start event (POST)
/// /game/events/{event_id}/leaderboard     event leaderboard (GET)
/// /game/clues/{clue_id}/complete          complete clue (POST)
/// /game/clues/{clue_id}/skip              skip clue (POST)
/// /game/sabotage                          sabotage a rival (POST)
///
/// /user/profile                           caller's profile (GET)
/// ```
///
/// All routes require a Bearer JWT (enforced by handler extractors).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/game", game::router())
        .nest("/user", profile::router())
}
