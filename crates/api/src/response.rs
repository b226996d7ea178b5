//! Typed response bodies for the game endpoints.
//!
//! Using these instead of ad-hoc `serde_json::json!` values keeps
//! the wire shapes compile-time checked and consistent.

use serde::Serialize;

use cardforge_db::models::card::Card;

/// Response for the progress and batch-progress endpoints.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: i32,
    pub energy: i32,
    pub level: i32,
    pub success: bool,
    pub message: String,
}

/// Response for the explicit level-up endpoint.
#[derive(Debug, Serialize)]
pub struct LevelUpResponse {
    pub level: i32,
    pub progress: i32,
    pub success: bool,
    pub message: String,
}

/// Response for the energy query endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResponse {
    pub energy: i32,
    /// Seconds until the next regeneration tick.
    pub regeneration_time: i64,
    /// Energy gained per regeneration interval.
    pub regeneration_rate: i32,
    pub success: bool,
}

/// Response for the cards listing endpoint.
#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub cards: Vec<Card>,
    pub success: bool,
}
