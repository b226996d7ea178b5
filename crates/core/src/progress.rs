//! Click batching and the card level/progress state machine.
//!
//! A card moves through `(level, progress)` states. `apply_clicks`
//! advances progress and may trigger an implicit level-up when the
//! 100% boundary is crossed; `level_up` is the explicit transition
//! that is only valid at exactly 100% progress below the level cap.
//!
//! A batch that crosses the boundary spends no energy at all: the
//! level-up absorbs the entire cost of the triggering batch. A batch
//! that lands just under 100% is charged in full.

use crate::error::GameError;

/// Progress gained per click, in percentage points.
pub const PROGRESS_PER_CLICK: i32 = 2;

/// Progress at which a card is ready to level up.
pub const LEVEL_UP_THRESHOLD: i32 = 100;

/// Highest reachable card level.
pub const MAX_LEVEL: i32 = 3;

/// Level assigned to newly provisioned cards.
pub const MIN_LEVEL: i32 = 1;

/// Result of applying a batch of clicks to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    /// New progress value. Zero exactly when a level-up occurred.
    pub progress: i32,
    /// New level. Unchanged unless a level-up occurred.
    pub level: i32,
    /// Energy actually deducted. Zero when a level-up occurred.
    pub energy_spent: i32,
    pub leveled_up: bool,
}

/// Result of an explicit level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpOutcome {
    pub level: i32,
    /// Always zero: progress resets on level-up.
    pub progress: i32,
}

/// Apply `clicks` clicks to a card at `(level, progress)`.
///
/// The energy check uses the raw requested `clicks`, before any
/// progress clamping: even if progress would cap at 100, the full
/// cost must be affordable. At the level cap clicks are still
/// accepted and charged; progress keeps rising for cosmetic purposes.
pub fn apply_clicks(
    level: i32,
    progress: i32,
    clicks: i32,
    available_energy: i32,
) -> Result<ClickOutcome, GameError> {
    if clicks < 1 {
        return Err(GameError::InvalidRequest(
            "Clicks must be a positive number".into(),
        ));
    }

    if available_energy < clicks {
        return Err(GameError::InsufficientEnergy {
            needed: clicks,
            available: available_energy,
        });
    }

    let requested = progress + clicks * PROGRESS_PER_CLICK;
    let leveled_up = requested >= LEVEL_UP_THRESHOLD && progress < LEVEL_UP_THRESHOLD;

    if leveled_up {
        Ok(ClickOutcome {
            progress: 0,
            level: (level + 1).min(MAX_LEVEL),
            energy_spent: 0,
            leveled_up: true,
        })
    } else {
        Ok(ClickOutcome {
            progress: requested.min(LEVEL_UP_THRESHOLD),
            level,
            energy_spent: clicks,
            leveled_up: false,
        })
    }
}

/// Explicitly level up a card at `(level, progress)`.
///
/// Unlike the click path, which silently caps at [`MAX_LEVEL`], the
/// explicit operation rejects cards already at the cap.
pub fn level_up(level: i32, progress: i32) -> Result<LevelUpOutcome, GameError> {
    if progress < LEVEL_UP_THRESHOLD {
        return Err(GameError::InsufficientProgress);
    }

    if level >= MAX_LEVEL {
        return Err(GameError::MaxLevelReached);
    }

    Ok(LevelUpOutcome {
        level: (level + 1).min(MAX_LEVEL),
        progress: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- apply_clicks: plain progress --

    #[test]
    fn single_click_advances_by_two_points() {
        let out = apply_clicks(1, 0, 1, 100).unwrap();

        assert_eq!(out.progress, 2);
        assert_eq!(out.level, 1);
        assert_eq!(out.energy_spent, 1);
        assert!(!out.leveled_up);
    }

    #[test]
    fn batch_advances_exactly_two_per_click() {
        for clicks in 1..=10 {
            for progress in (0..80).step_by(7) {
                let out = apply_clicks(2, progress, clicks, 100).unwrap();
                if out.leveled_up {
                    continue;
                }
                assert_eq!(out.progress, progress + clicks * 2);
                assert_eq!(out.level, 2);
                assert_eq!(out.energy_spent, clicks);
            }
        }
    }

    // -- apply_clicks: level-up boundary --

    #[test]
    fn crossing_the_boundary_levels_up_and_spends_nothing() {
        // 90% + 5 clicks = 100%: level-up, batch cost absorbed.
        let out = apply_clicks(1, 90, 5, 100).unwrap();

        assert_eq!(out.progress, 0);
        assert_eq!(out.level, 2);
        assert_eq!(out.energy_spent, 0);
        assert!(out.leveled_up);
    }

    #[test]
    fn overshooting_the_boundary_also_levels_up() {
        let out = apply_clicks(1, 95, 10, 100).unwrap();

        assert_eq!(out.progress, 0);
        assert_eq!(out.level, 2);
        assert_eq!(out.energy_spent, 0);
    }

    #[test]
    fn landing_just_under_the_boundary_is_charged_in_full() {
        let out = apply_clicks(1, 88, 5, 100).unwrap();

        assert_eq!(out.progress, 98);
        assert_eq!(out.energy_spent, 5);
        assert!(!out.leveled_up);
    }

    #[test]
    fn level_caps_at_three_via_clicks() {
        let out = apply_clicks(3, 98, 1, 100).unwrap();

        assert_eq!(out.level, 3);
        assert_eq!(out.progress, 0);
        assert!(out.leveled_up);
    }

    #[test]
    fn clicking_at_max_level_never_errors() {
        // (3, *) is a plateau: clicks still accepted and charged.
        let out = apply_clicks(3, 10, 4, 100).unwrap();

        assert_eq!(out.level, 3);
        assert_eq!(out.progress, 18);
        assert_eq!(out.energy_spent, 4);
    }

    // -- apply_clicks: rejections --

    #[test]
    fn zero_clicks_is_invalid() {
        assert_matches!(
            apply_clicks(1, 0, 0, 100),
            Err(GameError::InvalidRequest(_))
        );
    }

    #[test]
    fn negative_clicks_is_invalid() {
        assert_matches!(
            apply_clicks(1, 0, -1, 100),
            Err(GameError::InvalidRequest(_))
        );
    }

    #[test]
    fn insufficient_energy_never_partially_applies() {
        let err = apply_clicks(1, 40, 10, 9).unwrap_err();

        assert_eq!(
            err,
            GameError::InsufficientEnergy {
                needed: 10,
                available: 9,
            }
        );
    }

    #[test]
    fn energy_check_uses_raw_clicks_even_when_progress_would_cap() {
        // Progress would clamp at 100, but the full 10-click cost
        // must still be affordable.
        assert_matches!(
            apply_clicks(3, 99, 10, 5),
            Err(GameError::InsufficientEnergy { .. })
        );
    }

    // -- level_up --

    #[test]
    fn level_up_below_full_progress_is_rejected() {
        assert_matches!(level_up(1, 99), Err(GameError::InsufficientProgress));
    }

    #[test]
    fn level_up_at_full_progress_succeeds() {
        let out = level_up(2, 100).unwrap();

        assert_eq!(out.level, 3);
        assert_eq!(out.progress, 0);
    }

    #[test]
    fn level_up_at_max_level_is_rejected_regardless_of_progress() {
        assert_matches!(level_up(3, 100), Err(GameError::MaxLevelReached));
    }

    #[test]
    fn insufficient_progress_wins_over_max_level() {
        // Progress is checked first, matching the endpoint's order.
        assert_matches!(level_up(3, 50), Err(GameError::InsufficientProgress));
    }

    // -- end-to-end click economy --

    #[test]
    fn ten_click_batches_level_up_on_the_boundary_batch() {
        // Fresh user at 100 energy, card at (1, 0). Four full-price
        // 10-click batches reach 80% and 60 energy; the fifth batch
        // crosses 100%, levels up, and is absorbed free of charge.
        let mut energy = 100;
        let mut level = 1;
        let mut progress = 0;

        for expected_progress in [20, 40, 60, 80] {
            let out = apply_clicks(level, progress, 10, energy).unwrap();
            assert!(!out.leveled_up);
            assert_eq!(out.progress, expected_progress);
            energy -= out.energy_spent;
            level = out.level;
            progress = out.progress;
        }
        assert_eq!(energy, 60);

        let out = apply_clicks(level, progress, 10, energy).unwrap();
        assert!(out.leveled_up);
        assert_eq!(out.progress, 0);
        assert_eq!(out.level, 2);
        assert_eq!(out.energy_spent, 0);
        assert_eq!(energy - out.energy_spent, 60);
    }
}
