//! In-process request guard: per-client rate limiting, cooldown, and
//! batch-size validation.
//!
//! The guard is an explicitly constructed component (no singleton):
//! the host builds one per endpoint policy at startup and shares it
//! behind `Arc`. State is two small mutex-protected maps keyed by
//! client identifier; entries accumulate for the life of the process.
//! All checks take an explicit `now_ms` so tests control time.
//!
//! Callers must evaluate in this order: rate limit, then cooldown,
//! then payload validation, then the engine.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Rate-limit window length.
pub const RATE_WINDOW_MS: i64 = 60_000;

/// Client identifier used for guard keying when no user header is
/// present. Deliberately distinct from the storage layer's
/// `demo-user` default.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Tunables for one guard instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Requests allowed per client per 60-second window.
    pub max_requests_per_minute: u32,
    /// Upper bound on `clicks` in a single batch request.
    pub max_batch_clicks: i32,
    /// Minimum spacing between two allowed actions per client.
    pub cooldown: Duration,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            max_requests_per_minute: 60,
            max_batch_clicks: 10,
            cooldown: Duration::from_millis(100),
        }
    }
}

impl GuardConfig {
    /// Policy for the batch endpoint: a higher request budget and a
    /// shorter cooldown, since one batch replaces many single clicks.
    pub fn batch() -> Self {
        Self {
            max_requests_per_minute: 120,
            cooldown: Duration::from_millis(50),
            ..Self::default()
        }
    }
}

#[derive(Debug)]
struct Window {
    count: u32,
    started_ms: i64,
}

/// Per-client throttling state for one endpoint policy.
#[derive(Debug)]
pub struct RequestGuard {
    config: GuardConfig,
    windows: Mutex<HashMap<String, Window>>,
    cooldowns: Mutex<HashMap<String, i64>>,
}

impl RequestGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
            cooldowns: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Count a request against `key`'s window. Returns `false` once
    /// the window's budget is spent.
    ///
    /// The window is reset-on-check rather than sliding: the first
    /// request after 60 s of window age starts a fresh window with
    /// count 1. Exactly `max_requests_per_minute` requests succeed
    /// per window.
    pub fn check_rate_limit(&self, key: &str, now_ms: i64) -> bool {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match windows.get_mut(key) {
            Some(window) if now_ms - window.started_ms <= RATE_WINDOW_MS => {
                if window.count >= self.config.max_requests_per_minute {
                    tracing::debug!(client = key, "rate limit exceeded");
                    return false;
                }
                window.count += 1;
                true
            }
            _ => {
                windows.insert(
                    key.to_string(),
                    Window {
                        count: 1,
                        started_ms: now_ms,
                    },
                );
                true
            }
        }
    }

    /// Check-and-stamp the cooldown for `key`. An allowed check
    /// immediately records `now_ms` as the new last-action time, so
    /// the operation is atomic from the caller's perspective.
    pub fn check_cooldown(&self, key: &str, now_ms: i64) -> bool {
        let cooldown_ms = i64::try_from(self.config.cooldown.as_millis()).unwrap_or(i64::MAX);
        let mut cooldowns = self
            .cooldowns
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match cooldowns.get(key) {
            Some(&last_ms) if now_ms - last_ms <= cooldown_ms => {
                tracing::debug!(client = key, "cooldown active");
                false
            }
            _ => {
                cooldowns.insert(key.to_string(), now_ms);
                true
            }
        }
    }

    /// Validate a batch click count against the configured maximum.
    /// A violation is a client error, not a throttling condition.
    pub fn validate_batch_clicks(&self, clicks: i32) -> bool {
        (1..=self.config.max_batch_clicks).contains(&clicks)
    }
}

/// Current wall-clock time in milliseconds, for production call sites.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
