//! Route definitions for the caller's profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes mounted at `/user`.
pub fn router() -> Router<AppState> {
    Router::new().route("/profile", get(profile::get_profile))
}
