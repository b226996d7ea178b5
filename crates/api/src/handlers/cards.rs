//! Handler for the cards listing endpoint.

use axum::extract::State;
use axum::Json;

use cardforge_db::repositories::CardRepo;

use crate::error::AppResult;
use crate::middleware::identity::ClientIdentity;
use crate::response::CardsResponse;
use crate::state::AppState;

use super::load_user;

/// GET /api/cards -- list the user's cards, provisioning the default
/// set of eight on first access when auto-provisioning is enabled.
pub async fn list_cards(
    State(state): State<AppState>,
    identity: ClientIdentity,
) -> AppResult<Json<CardsResponse>> {
    let user = load_user(&state, &identity.user_id).await?;

    let mut cards = CardRepo::list_for_user(&state.pool, user.id).await?;
    if cards.is_empty() && state.config.auto_provision {
        cards = CardRepo::insert_defaults(&state.pool, user.id).await?;
        tracing::info!(user = %identity.user_id, "provisioned default card set");
    }

    Ok(Json(CardsResponse {
        cards,
        success: true,
    }))
}
