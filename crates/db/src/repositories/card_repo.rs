//! Repository for the `cards` table.

use sqlx::{PgConnection, PgPool};

use cardforge_core::catalog::CARD_TYPES;
use cardforge_core::types::DbId;

use crate::models::card::{Card, CreateCard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, card_type, name, description, image, level, progress, created_at, updated_at";

/// Provides CRUD operations for cards.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new card, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateCard) -> Result<Card, sqlx::Error> {
        let query = format!(
            "INSERT INTO cards (user_id, card_type, name, description, image, level, progress)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(input.user_id)
            .bind(input.card_type.slug())
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.level)
            .bind(input.progress)
            .fetch_one(conn)
            .await
    }

    /// List all cards owned by a user, oldest first (catalog order
    /// for default sets).
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Card>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Read a card owned by a user under `FOR UPDATE` inside a
    /// transaction.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cards WHERE id = $1 AND user_id = $2 FOR UPDATE");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(conn)
            .await
    }

    /// Persist a progress/level transition, including the display
    /// fields recomputed on level change.
    pub async fn update_state(
        conn: &mut PgConnection,
        id: DbId,
        level: i32,
        progress: i32,
        image: &str,
        description: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE cards SET
                level = $2,
                progress = $3,
                image = $4,
                description = $5,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(level)
        .bind(progress)
        .bind(image)
        .bind(description)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Provision the default set of eight cards (one per catalog
    /// kind) for a user with no cards yet.
    pub async fn insert_defaults(pool: &PgPool, user_id: DbId) -> Result<Vec<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut cards = Vec::with_capacity(CARD_TYPES.len());
        for card_type in CARD_TYPES {
            let input = CreateCard::default_for(user_id, card_type);
            cards.push(Self::create(&mut *tx, &input).await?);
        }
        tx.commit().await?;
        Ok(cards)
    }
}
