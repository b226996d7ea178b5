//! User entity model and DTOs.

use cardforge_core::energy::DEFAULT_MAX_ENERGY;
use cardforge_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub energy: i32,
    pub max_energy: i32,
    /// Advanced only when regeneration actually added energy.
    pub last_energy_regeneration: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub energy: i32,
    pub max_energy: i32,
}

impl CreateUser {
    /// Demo provisioning defaults: full energy, synthesized email.
    pub fn demo(username: &str) -> Self {
        Self {
            username: username.to_string(),
            email: format!("{username}@demo.com"),
            energy: DEFAULT_MAX_ENERGY,
            max_energy: DEFAULT_MAX_ENERGY,
        }
    }
}
