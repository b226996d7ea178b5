//! Handlers for the progress and batch-progress endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use cardforge_core::error::GameError;
use cardforge_core::progress;
use cardforge_db::repositories::{CardRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::identity::ClientIdentity;
use crate::response::ProgressResponse;
use crate::state::AppState;

use super::{
    apply_guard, load_card_for_update, load_user, parse_body, parse_clicks, require_card_id,
};

/// POST /api/progress -- apply a single click to a card.
pub async fn update_progress(
    State(state): State<AppState>,
    identity: ClientIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ProgressResponse>> {
    apply_guard(&state.guard, &identity)?;

    let body = parse_body(body)?;
    let card_id = require_card_id(&body)?;

    advance(&state, &identity, &card_id, 1, false).await
}

/// POST /api/batch-progress -- apply a batch of clicks to a card.
pub async fn batch_progress(
    State(state): State<AppState>,
    identity: ClientIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ProgressResponse>> {
    apply_guard(&state.batch_guard, &identity)?;

    let body = parse_body(body)?;
    let card_id = require_card_id(&body)?;
    let clicks = parse_clicks(&body)?;

    if !state.batch_guard.validate_batch_clicks(clicks) {
        let max = state.batch_guard.config().max_batch_clicks;
        return Err(GameError::BatchLimitExceeded { max }.into());
    }

    advance(&state, &identity, &card_id, clicks, true).await
}

/// Shared orchestration: lock the user and card rows, run the
/// engine, persist both, and shape the response.
async fn advance(
    state: &AppState,
    identity: &ClientIdentity,
    card_id: &str,
    clicks: i32,
    batch: bool,
) -> AppResult<Json<ProgressResponse>> {
    let user = load_user(state, &identity.user_id).await?;

    let mut tx = state.pool.begin().await?;

    // Re-read under lock: the pre-transaction copy may be stale.
    let user = UserRepo::find_by_id_for_update(&mut tx, user.id)
        .await?
        .ok_or(GameError::UserNotFound)?;
    let card = load_card_for_update(&mut tx, state, user.id, card_id).await?;

    let outcome = progress::apply_clicks(card.level, card.progress, clicks, user.energy)?;

    let (image, description) = if outcome.leveled_up {
        let kind = card
            .kind()
            .map_err(|e| GameError::Internal(e.to_string()))?;
        (
            kind.image(outcome.level),
            kind.description(outcome.level).to_string(),
        )
    } else {
        (card.image.clone(), card.description.clone())
    };

    CardRepo::update_state(
        &mut tx,
        card.id,
        outcome.level,
        outcome.progress,
        &image,
        &description,
    )
    .await?;

    let energy = (user.energy - outcome.energy_spent).max(0);
    UserRepo::update_energy(&mut tx, user.id, energy).await?;

    tx.commit().await?;

    tracing::info!(
        user = %identity.user_id,
        card = card.id,
        clicks,
        leveled_up = outcome.leveled_up,
        "progress applied"
    );

    let message = match (outcome.leveled_up, batch) {
        (true, true) => format!("Card leveled up! Used {clicks} clicks."),
        (false, true) => format!("Progress updated! Used {clicks} clicks."),
        (true, false) => "Card leveled up!".to_string(),
        (false, false) => "Progress updated successfully".to_string(),
    };

    Ok(Json(ProgressResponse {
        progress: outcome.progress,
        energy,
        level: outcome.level,
        success: true,
        message,
    }))
}
