use std::time::Duration;

use cardforge_core::guard::GuardConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated
    /// `CORS_ORIGINS`. The default `*` means any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Auto-provision demo users and cards on first access
    /// (default: `true`). Disable for real multi-user deployments.
    pub auto_provision: bool,
    /// Request budget per client per minute for single-action
    /// endpoints (default: `60`).
    pub max_requests_per_minute: u32,
    /// Request budget per client per minute for the batch endpoint
    /// (default: `120`).
    pub batch_max_requests_per_minute: u32,
    /// Upper bound on `clicks` per batch request (default: `10`).
    pub max_batch_clicks: i32,
    /// Cooldown between actions for single-action endpoints, in
    /// milliseconds (default: `100`).
    pub cooldown_ms: u64,
    /// Cooldown for the batch endpoint, in milliseconds
    /// (default: `50`).
    pub batch_cooldown_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default   |
    /// |---------------------------------|-----------|
    /// | `HOST`                          | `0.0.0.0` |
    /// | `PORT`                          | `3000`    |
    /// | `CORS_ORIGINS`                  | `*`       |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`      |
    /// | `AUTO_PROVISION`                | `true`    |
    /// | `MAX_REQUESTS_PER_MINUTE`       | `60`      |
    /// | `BATCH_MAX_REQUESTS_PER_MINUTE` | `120`     |
    /// | `MAX_BATCH_CLICKS`              | `10`      |
    /// | `COOLDOWN_MS`                   | `100`     |
    /// | `BATCH_COOLDOWN_MS`             | `50`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let auto_provision: bool = std::env::var("AUTO_PROVISION")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("AUTO_PROVISION must be true or false");

        let max_requests_per_minute: u32 = std::env::var("MAX_REQUESTS_PER_MINUTE")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("MAX_REQUESTS_PER_MINUTE must be a valid u32");

        let batch_max_requests_per_minute: u32 = std::env::var("BATCH_MAX_REQUESTS_PER_MINUTE")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("BATCH_MAX_REQUESTS_PER_MINUTE must be a valid u32");

        let max_batch_clicks: i32 = std::env::var("MAX_BATCH_CLICKS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("MAX_BATCH_CLICKS must be a valid i32");

        let cooldown_ms: u64 = std::env::var("COOLDOWN_MS")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("COOLDOWN_MS must be a valid u64");

        let batch_cooldown_ms: u64 = std::env::var("BATCH_COOLDOWN_MS")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .expect("BATCH_COOLDOWN_MS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auto_provision,
            max_requests_per_minute,
            batch_max_requests_per_minute,
            max_batch_clicks,
            cooldown_ms,
            batch_cooldown_ms,
        }
    }

    /// Guard policy for the single-action endpoints.
    pub fn guard_config(&self) -> GuardConfig {
        GuardConfig {
            max_requests_per_minute: self.max_requests_per_minute,
            max_batch_clicks: self.max_batch_clicks,
            cooldown: Duration::from_millis(self.cooldown_ms),
        }
    }

    /// Guard policy for the batch endpoint.
    pub fn batch_guard_config(&self) -> GuardConfig {
        GuardConfig {
            max_requests_per_minute: self.batch_max_requests_per_minute,
            max_batch_clicks: self.max_batch_clicks,
            cooldown: Duration::from_millis(self.batch_cooldown_ms),
        }
    }
}
