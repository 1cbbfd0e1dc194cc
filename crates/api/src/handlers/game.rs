//! Handlers for game progression: clue view, start, complete, skip,
//! sabotage, and the event leaderboard.
//!
//! All endpoints require authentication via the [`AuthUser`] extractor.
//! Authorization is enforced here, once, at the API boundary; the
//! progression engine below runs with trusted access to the store.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use questline_core::error::CoreError;
use questline_core::sabotage::SABOTAGE_COST;
use questline_core::types::{DbId, Timestamp};
use questline_db::models::profile::Profile;
use questline_db::repositories::{
    CompletionOutcome, LeaderboardRepo, ProfileRepo, ProgressionRepo, SabotageOutcome,
    SkipOutcome, StartOutcome,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// Body for `POST /game/clues/{clue_id}/complete`.
#[derive(Debug, Deserialize)]
pub struct CompleteClueRequest {
    /// Riddle answer. Optional; scan-type clues submit nothing.
    #[serde(default)]
    pub answer: Option<String>,
}

/// Body for `POST /game/sabotage`.
#[derive(Debug, Deserialize)]
pub struct SabotageRequest {
    pub rival_id: DbId,
}

/// Response for a completion attempt.
#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    /// False when the clue was already completed (no reward granted).
    pub rewarded: bool,
    /// The clue unlocked by this completion, if the chain continues.
    pub unlocked_clue_id: Option<DbId>,
    /// The updated profile after the reward grant; absent on a no-op.
    pub profile: Option<Profile>,
}

/// Response for a skip.
#[derive(Debug, Serialize)]
pub struct SkipResponse {
    pub unlocked_clue_id: Option<DbId>,
}

/// Response for starting an event.
#[derive(Debug, Serialize)]
pub struct StartEventResponse {
    pub first_clue_id: DbId,
}

/// Response for a successful sabotage.
#[derive(Debug, Serialize)]
pub struct SabotageResponse {
    /// The actor's remaining coin balance.
    pub coins: i64,
    /// End of the target's freeze window.
    pub frozen_until: Timestamp,
}

// ---------------------------------------------------------------------------
// Clue view & start
// ---------------------------------------------------------------------------

/// GET /api/v1/game/events/{event_id}/clues
///
/// Every clue of the event in sequence order, annotated with the caller's
/// completion/lock state.
pub async fn get_clues(
    user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match ProgressionRepo::clue_view(&state.pool, user.user_id, event_id).await? {
        Some(clues) => Ok(Json(DataResponse { data: clues })),
        None => Err(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }
        .into()),
    }
}

/// POST /api/v1/game/events/{event_id}/start
///
/// Materialize the caller's entry into the event by unlocking its first clue.
pub async fn start_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match ProgressionRepo::start_event(&state.pool, user.user_id, event_id).await? {
        StartOutcome::Started { first_clue_id } => Ok(Json(DataResponse {
            data: StartEventResponse { first_clue_id },
        })),
        StartOutcome::NoClues => Err(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }
        .into()),
    }
}

// ---------------------------------------------------------------------------
// Completion & skip
// ---------------------------------------------------------------------------

/// POST /api/v1/game/clues/{clue_id}/complete
///
/// Verify the answer, mark the clue completed, unlock the next clue, and
/// grant rewards. Re-completing an already-completed clue is a safe no-op
/// with `rewarded: false`.
pub async fn complete_clue(
    user: AuthUser,
    State(state): State<AppState>,
    Path(clue_id): Path<DbId>,
    Json(input): Json<CompleteClueRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = ProgressionRepo::complete_clue(
        &state.pool,
        user.user_id,
        clue_id,
        input.answer.as_deref(),
    )
    .await?;

    match outcome {
        CompletionOutcome::Completed {
            profile,
            unlocked_clue_id,
        } => Ok(Json(DataResponse {
            data: CompletionResponse {
                rewarded: true,
                unlocked_clue_id,
                profile: Some(profile),
            },
        })),
        CompletionOutcome::AlreadyCompleted => Ok(Json(DataResponse {
            data: CompletionResponse {
                rewarded: false,
                unlocked_clue_id: None,
                profile: None,
            },
        })),
        CompletionOutcome::IncorrectAnswer => Err(CoreError::IncorrectAnswer.into()),
        CompletionOutcome::ClueNotFound => Err(CoreError::NotFound {
            entity: "Clue",
            id: clue_id,
        }
        .into()),
        CompletionOutcome::ProfileNotFound => Err(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }
        .into()),
    }
}

/// POST /api/v1/game/clues/{clue_id}/skip
///
/// Mark the clue completed and unlock the next one, granting no rewards.
pub async fn skip_clue(
    user: AuthUser,
    State(state): State<AppState>,
    Path(clue_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match ProgressionRepo::skip_clue(&state.pool, user.user_id, clue_id).await? {
        SkipOutcome::Skipped { unlocked_clue_id } => Ok(Json(DataResponse {
            data: SkipResponse { unlocked_clue_id },
        })),
        SkipOutcome::ClueNotFound => Err(CoreError::NotFound {
            entity: "Clue",
            id: clue_id,
        }
        .into()),
    }
}

// ---------------------------------------------------------------------------
// Sabotage
// ---------------------------------------------------------------------------

/// POST /api/v1/game/sabotage
///
/// Spend coins to freeze a rival's profile for the configured window.
pub async fn sabotage(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SabotageRequest>,
) -> AppResult<impl IntoResponse> {
    match ProfileRepo::sabotage(&state.pool, user.user_id, input.rival_id).await? {
        SabotageOutcome::Sabotaged {
            actor,
            frozen_until,
        } => Ok(Json(DataResponse {
            data: SabotageResponse {
                coins: actor.coins,
                frozen_until,
            },
        })),
        SabotageOutcome::SelfSabotage => {
            Err(CoreError::Validation("Cannot sabotage yourself".into()).into())
        }
        SabotageOutcome::InsufficientFunds { available } => Err(CoreError::InsufficientFunds {
            available,
            required: SABOTAGE_COST,
        }
        .into()),
        SabotageOutcome::ActorNotFound => Err(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }
        .into()),
        SabotageOutcome::TargetNotFound => Err(CoreError::NotFound {
            entity: "Profile",
            id: input.rival_id,
        }
        .into()),
    }
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// GET /api/v1/game/events/{event_id}/leaderboard
///
/// Store-provided ranking of the event's participants.
pub async fn get_leaderboard(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entries = LeaderboardRepo::for_event(&state.pool, event_id).await?;
    Ok(Json(DataResponse { data: entries }))
}
