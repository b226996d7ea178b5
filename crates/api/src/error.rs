use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cardforge_core::error::GameError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`GameError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the
/// `{message, code, status}` JSON error bodies all endpoints share.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cardforge_core`.
    #[error(transparent)]
    Game(#[from] GameError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Wrong HTTP method on a known route.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Game(game) => match game {
                GameError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal game error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Internal server error".to_string(),
                    )
                }
                other => (game_status(other), other.code(), other.to_string()),
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }

            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not allowed".to_string(),
            ),
        };

        let body = json!({
            "message": message,
            "code": code,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// HTTP status for a non-internal domain error.
fn game_status(err: &GameError) -> StatusCode {
    match err {
        GameError::MissingCardId
        | GameError::InvalidRequest(_)
        | GameError::InsufficientEnergy { .. }
        | GameError::InsufficientProgress
        | GameError::MaxLevelReached
        | GameError::BatchLimitExceeded { .. } => StatusCode::BAD_REQUEST,

        GameError::CardNotFound | GameError::UserNotFound => StatusCode::NOT_FOUND,

        GameError::RateLimitExceeded | GameError::CooldownActive => StatusCode::TOO_MANY_REQUESTS,

        GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
