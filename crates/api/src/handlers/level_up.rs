//! Handler for the explicit level-up endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use cardforge_core::error::GameError;
use cardforge_core::progress;
use cardforge_db::repositories::CardRepo;

use crate::error::AppResult;
use crate::middleware::identity::ClientIdentity;
use crate::response::LevelUpResponse;
use crate::state::AppState;

use super::{apply_guard, load_card_for_update, load_user, parse_body, require_card_id};

/// POST /api/level-up -- level up a card sitting at 100% progress.
///
/// Unlike the click path, this rejects cards already at the level
/// cap. No energy is involved.
pub async fn level_up_card(
    State(state): State<AppState>,
    identity: ClientIdentity,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<LevelUpResponse>> {
    apply_guard(&state.guard, &identity)?;

    let body = parse_body(body)?;
    let card_id = require_card_id(&body)?;

    let user = load_user(&state, &identity.user_id).await?;

    let mut tx = state.pool.begin().await?;
    let card = load_card_for_update(&mut tx, &state, user.id, &card_id).await?;

    let outcome = progress::level_up(card.level, card.progress)?;

    let kind = card
        .kind()
        .map_err(|e| GameError::Internal(e.to_string()))?;
    CardRepo::update_state(
        &mut tx,
        card.id,
        outcome.level,
        outcome.progress,
        &kind.image(outcome.level),
        kind.description(outcome.level),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        user = %identity.user_id,
        card = card.id,
        level = outcome.level,
        "card leveled up"
    );

    Ok(Json(LevelUpResponse {
        level: outcome.level,
        progress: outcome.progress,
        success: true,
        message: format!("Card leveled up to level {}!", outcome.level),
    }))
}
