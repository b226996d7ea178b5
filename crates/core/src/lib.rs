//! Domain logic for the cardforge idle card game.
//!
//! Everything here is pure computation: energy regeneration, the
//! click/progress/level state machine, the static card catalog, and
//! the in-process request guard. Persistence lives in `cardforge-db`
//! and the HTTP surface in `cardforge-api`.

pub mod catalog;
pub mod energy;
pub mod error;
pub mod guard;
pub mod progress;
pub mod types;
