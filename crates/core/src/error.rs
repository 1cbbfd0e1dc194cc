use crate::types::DbId;

/// Domain-level error type shared across the workspace.
///
/// Recoverable game-rule rejections (`IncorrectAnswer`, `InsufficientFunds`)
/// are variants here rather than panics or ad-hoc strings so the API layer
/// can map each one to a stable HTTP error code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Submitted riddle answer did not match. Recoverable; no state changed.
    #[error("Incorrect answer")]
    IncorrectAnswer,

    /// Actor's coin balance is below the cost of the attempted action.
    #[error("Insufficient funds: have {available}, need {required}")]
    InsufficientFunds { available: i64, required: i64 },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
