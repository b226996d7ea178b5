//! Repository for the `users` table.

use sqlx::{PgConnection, PgPool};

use cardforge_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, username, email, energy, max_energy, last_energy_regeneration, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a user by username or insert them with the given
    /// defaults. Race-safe: concurrent first requests for the same
    /// username resolve through the unique constraint upsert.
    pub async fn get_or_create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, energy, max_energy)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (username) DO UPDATE SET username = EXCLUDED.username
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(input.energy)
            .bind(input.max_energy)
            .fetch_one(pool)
            .await
    }

    /// Re-read a user row under `FOR UPDATE` inside a transaction,
    /// blocking concurrent writers to the same row until commit.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Persist a new energy value.
    pub async fn update_energy(
        conn: &mut PgConnection,
        id: DbId,
        energy: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET energy = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(energy)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Persist a regeneration result: new energy and the timestamp
    /// of the last applied tick.
    pub async fn update_regeneration(
        conn: &mut PgConnection,
        id: DbId,
        energy: i32,
        last_energy_regeneration: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                energy = $2,
                last_energy_regeneration = $3,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(energy)
        .bind(last_energy_regeneration)
        .execute(conn)
        .await?;
        Ok(())
    }
}
