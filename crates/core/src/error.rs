//! Domain error taxonomy.
//!
//! Each variant corresponds to one client-facing error code; the HTTP
//! status mapping lives in the API crate's `IntoResponse` impl.

/// Domain-level error for game operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The request did not name a card.
    #[error("Card ID is required")]
    MissingCardId,

    /// A malformed or out-of-range field in the request payload.
    #[error("{0}")]
    InvalidRequest(String),

    /// The user cannot afford the energy cost of the requested clicks.
    #[error("Insufficient energy. Need {needed}, have {available}")]
    InsufficientEnergy { needed: i32, available: i32 },

    /// Explicit level-up attempted below 100% progress.
    #[error("Card progress must be 100% to level up")]
    InsufficientProgress,

    /// Explicit level-up attempted on a card already at the level cap.
    #[error("Card is already at maximum level")]
    MaxLevelReached,

    /// Batch click count above the configured per-request maximum.
    #[error("Maximum {max} clicks allowed per request")]
    BatchLimitExceeded { max: i32 },

    /// Per-client request budget for the current window is spent.
    #[error("Too many requests. Please try again later.")]
    RateLimitExceeded,

    /// The per-client cooldown since the last action has not elapsed.
    #[error("Please wait before making another request.")]
    CooldownActive,

    /// Referenced card does not exist (only reachable when
    /// auto-provisioning is disabled).
    #[error("Card not found")]
    CardNotFound,

    /// Referenced user does not exist (only reachable when
    /// auto-provisioning is disabled).
    #[error("User not found")]
    UserNotFound,

    /// Invariant violation or corrupt stored state.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    /// Stable wire code for this error, carried in every error body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCardId => "MISSING_CARD_ID",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InsufficientEnergy { .. } => "INSUFFICIENT_ENERGY",
            Self::InsufficientProgress => "INSUFFICIENT_PROGRESS",
            Self::MaxLevelReached => "MAX_LEVEL_REACHED",
            Self::BatchLimitExceeded { .. } => "BATCH_LIMIT_EXCEEDED",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::CooldownActive => "COOLDOWN_ACTIVE",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(GameError::MissingCardId.code(), "MISSING_CARD_ID");
        assert_eq!(GameError::RateLimitExceeded.code(), "RATE_LIMIT_EXCEEDED");
        assert_eq!(GameError::CooldownActive.code(), "COOLDOWN_ACTIVE");
        assert_eq!(
            GameError::BatchLimitExceeded { max: 10 }.code(),
            "BATCH_LIMIT_EXCEEDED"
        );
    }

    #[test]
    fn insufficient_energy_message_names_amounts() {
        let err = GameError::InsufficientEnergy {
            needed: 10,
            available: 4,
        };
        assert_eq!(err.to_string(), "Insufficient energy. Need 10, have 4");
    }

    #[test]
    fn batch_limit_message_names_maximum() {
        let err = GameError::BatchLimitExceeded { max: 10 };
        assert_eq!(err.to_string(), "Maximum 10 clicks allowed per request");
    }
}
