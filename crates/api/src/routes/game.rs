//! Route definitions for game progression.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Game routes mounted at `/game`.
///
/// ```text
/// GET  /events/{event_id}/clues        -> get_clues
/// POST /events/{event_id}/start        -> start_event
/// GET  /events/{event_id}/leaderboard  -> get_leaderboard
/// POST /clues/{clue_id}/complete       -> complete_clue
/// POST /clues/{clue_id}/skip           -> skip_clue
/// POST /sabotage                       -> sabotage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/{event_id}/clues", get(game::get_clues))
        .route("/events/{event_id}/start", post(game::start_event))
        .route(
            "/events/{event_id}/leaderboard",
            get(game::get_leaderboard),
        )
        .route("/clues/{clue_id}/complete", post(game::complete_clue))
        .route("/clues/{clue_id}/skip", post(game::skip_clue))
        .route("/sabotage", post(game::sabotage))
}
