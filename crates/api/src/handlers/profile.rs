//! Handlers for the caller's own profile.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use questline_core::error::CoreError;
use questline_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/user/profile
///
/// The caller's profile as stored: XP, level, profession, coins, and the
/// freeze status set by sabotage (interpreting the freeze is the reader's
/// concern).
pub async fn get_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    match ProfileRepo::find_by_id(&state.pool, user.user_id).await? {
        Some(profile) => Ok(Json(DataResponse { data: profile })),
        None => Err(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }
        .into()),
    }
}
