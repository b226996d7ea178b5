use std::sync::Arc;

use cardforge_core::guard::RequestGuard;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`). The guards are
/// constructed once here, at startup, and own all throttling state
/// for the process.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cardforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Throttling guard for the single-action endpoints
    /// (progress, level-up).
    pub guard: Arc<RequestGuard>,
    /// Relaxed-rate guard for the batch endpoint.
    pub batch_guard: Arc<RequestGuard>,
}

impl AppState {
    pub fn new(pool: cardforge_db::DbPool, config: ServerConfig) -> Self {
        let guard = Arc::new(RequestGuard::new(config.guard_config()));
        let batch_guard = Arc::new(RequestGuard::new(config.batch_guard_config()));
        Self {
            pool,
            config: Arc::new(config),
            guard,
            batch_guard,
        }
    }
}
