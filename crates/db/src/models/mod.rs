//! Row models and creation DTOs.

pub mod card;
pub mod user;
