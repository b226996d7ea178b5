//! Handler for the energy query endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use cardforge_core::energy::{self, REGEN_RATE};
use cardforge_core::error::GameError;
use cardforge_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::identity::ClientIdentity;
use crate::response::EnergyResponse;
use crate::state::AppState;

use super::load_user;

/// GET /api/energy -- report current energy with regeneration
/// applied.
///
/// Read-mostly, but still persists the regenerated value and
/// timestamp when a tick landed, inside the same row lock the
/// mutating endpoints use.
pub async fn get_energy(
    State(state): State<AppState>,
    identity: ClientIdentity,
) -> AppResult<Json<EnergyResponse>> {
    let user = load_user(&state, &identity.user_id).await?;

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::find_by_id_for_update(&mut tx, user.id)
        .await?
        .ok_or(GameError::UserNotFound)?;

    let snapshot = energy::regenerate(
        user.energy,
        user.max_energy,
        user.last_energy_regeneration,
        Utc::now(),
    );

    if snapshot.energy != user.energy || snapshot.last_regen != user.last_energy_regeneration {
        UserRepo::update_regeneration(&mut tx, user.id, snapshot.energy, snapshot.last_regen)
            .await?;
    }

    tx.commit().await?;

    Ok(Json(EnergyResponse {
        energy: snapshot.energy,
        regeneration_time: snapshot.seconds_until_next_regen,
        regeneration_rate: REGEN_RATE,
        success: true,
    }))
}
