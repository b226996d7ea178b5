//! Card entity model and DTOs.

use cardforge_core::catalog::CardType;
use cardforge_core::progress::MIN_LEVEL;
use cardforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full card row from the `cards` table.
///
/// Serialized directly in the cards listing; the owning user id is
/// internal and not exposed.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: DbId,
    #[serde(skip)]
    pub user_id: DbId,
    /// Stored catalog slug, e.g. `uzun_kilic`.
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub level: i32,
    pub progress: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Card {
    /// Parse the stored catalog slug back into a [`CardType`].
    pub fn kind(&self) -> Result<CardType, cardforge_core::catalog::UnknownCardType> {
        self.card_type.parse()
    }
}

/// DTO for creating a new card.
#[derive(Debug, Clone)]
pub struct CreateCard {
    pub user_id: DbId,
    pub card_type: CardType,
    pub name: String,
    pub description: String,
    pub image: String,
    pub level: i32,
    pub progress: i32,
}

impl CreateCard {
    /// A fresh level-1 card of the given kind with catalog defaults.
    pub fn default_for(user_id: DbId, card_type: CardType) -> Self {
        Self {
            user_id,
            card_type,
            name: card_type.name().to_string(),
            description: card_type.description(MIN_LEVEL).to_string(),
            image: card_type.image(MIN_LEVEL),
            level: MIN_LEVEL,
            progress: 0,
        }
    }

    /// The placeholder card provisioned when a progress request names
    /// a card that does not exist yet.
    pub fn demo(user_id: DbId) -> Self {
        Self {
            name: "Demo Card".to_string(),
            description: "Demo card for testing".to_string(),
            ..Self::default_for(user_id, CardType::UzunKilic)
        }
    }
}
