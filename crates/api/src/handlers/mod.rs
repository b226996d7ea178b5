//! HTTP handlers for the game endpoints.
//!
//! Every mutating handler follows the same fixed order: throttling
//! guard (rate limit, then cooldown), payload validation, then a
//! single transaction that locks the affected rows `FOR UPDATE`,
//! runs the pure engine, and persists the result. Two concurrent
//! requests for the same card serialize on the row lock instead of
//! overwriting each other.

pub mod cards;
pub mod energy;
pub mod level_up;
pub mod progress;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;
use sqlx::PgConnection;

use cardforge_core::error::GameError;
use cardforge_core::guard::{now_ms, RequestGuard};
use cardforge_core::types::DbId;
use cardforge_db::models::card::{Card, CreateCard};
use cardforge_db::models::user::{CreateUser, User};
use cardforge_db::repositories::{CardRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::identity::ClientIdentity;
use crate::state::AppState;

/// Run the throttling checks in their fixed order: rate limit first,
/// then cooldown. An allowed pass consumes budget and stamps the
/// cooldown even if the request later fails validation.
fn apply_guard(guard: &RequestGuard, identity: &ClientIdentity) -> Result<(), GameError> {
    let now = now_ms();

    if !guard.check_rate_limit(&identity.guard_key, now) {
        return Err(GameError::RateLimitExceeded);
    }

    if !guard.check_cooldown(&identity.guard_key, now) {
        return Err(GameError::CooldownActive);
    }

    Ok(())
}

/// Unwrap the request body, mapping a missing or malformed JSON body
/// to a client error instead of the framework's default rejection.
fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, GameError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(_) => Err(GameError::InvalidRequest("Request body is required".into())),
    }
}

/// Extract a non-empty `cardId` from the payload.
fn require_card_id(body: &Value) -> Result<String, GameError> {
    match body.get("cardId").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => Ok(id.to_string()),
        _ => Err(GameError::MissingCardId),
    }
}

/// Extract `clicks` from the payload, defaulting to 1 when absent.
/// Non-integer or sub-1 values are client errors.
fn parse_clicks(body: &Value) -> Result<i32, GameError> {
    let invalid = || GameError::InvalidRequest("Clicks must be a positive number".into());

    match body.get("clicks") {
        None | Some(Value::Null) => Ok(1),
        Some(value) => {
            let clicks = value.as_i64().ok_or_else(invalid)?;
            if clicks < 1 {
                return Err(invalid());
            }
            i32::try_from(clicks).map_err(|_| invalid())
        }
    }
}

/// Load the user record for this identity, provisioning a demo user
/// on first access when auto-provisioning is enabled.
async fn load_user(state: &AppState, username: &str) -> AppResult<User> {
    if state.config.auto_provision {
        let user = UserRepo::get_or_create(&state.pool, &CreateUser::demo(username)).await?;
        Ok(user)
    } else {
        let user = UserRepo::find_by_username(&state.pool, username)
            .await?
            .ok_or(GameError::UserNotFound)?;
        Ok(user)
    }
}

/// Load and lock the requested card inside the caller's transaction,
/// provisioning a demo card when the identifier is unknown and
/// auto-provisioning is enabled.
async fn load_card_for_update(
    conn: &mut PgConnection,
    state: &AppState,
    user_id: DbId,
    raw_card_id: &str,
) -> AppResult<Card> {
    if let Ok(id) = raw_card_id.parse::<DbId>() {
        if let Some(card) = CardRepo::find_for_update(conn, id, user_id).await? {
            return Ok(card);
        }
    }

    if state.config.auto_provision {
        let card = CardRepo::create(conn, &CreateCard::demo(user_id)).await?;
        tracing::debug!(card = card.id, "provisioned demo card for unknown id");
        Ok(card)
    } else {
        Err(GameError::CardNotFound.into())
    }
}
