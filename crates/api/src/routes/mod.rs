//! Route table for the game endpoints.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

/// JSON 405 for a matched path hit with the wrong method. The
/// framework default 405 has an empty body; clients expect the
/// `{message, code, status}` shape.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Plain `OPTIONS` (non-preflight) is answered 200 with no body.
/// Actual preflight requests are handled by the CORS layer before
/// they reach the router.
async fn preflight() {}

/// All game routes, mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/progress",
            post(handlers::progress::update_progress)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/batch-progress",
            post(handlers::progress::batch_progress)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/level-up",
            post(handlers::level_up::level_up_card)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/energy",
            get(handlers::energy::get_energy)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/cards",
            get(handlers::cards::list_cards)
                .options(preflight)
                .fallback(method_not_allowed),
        )
}
