//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept the pool or, for the `*_for_update` row-locking
//! variants used inside transactions, a `&mut PgConnection`.

pub mod card_repo;
pub mod user_repo;

pub use card_repo::CardRepo;
pub use user_repo::UserRepo;
