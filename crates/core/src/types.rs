//! Shared type aliases used across the workspace.

/// Internal database identifier (`BIGSERIAL`).
pub type DbId = i64;

/// UTC timestamp as stored in Postgres `TIMESTAMPTZ` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
