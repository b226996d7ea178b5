//! Energy accounting with time-based regeneration.
//!
//! Energy regenerates at a fixed rate of [`REGEN_RATE`] per
//! [`REGEN_INTERVAL_SECS`]. The stored regeneration timestamp only
//! advances when at least one whole interval has elapsed, so partial
//! progress toward the next tick is never discarded.

use crate::types::Timestamp;

/// Energy cap for newly provisioned users.
pub const DEFAULT_MAX_ENERGY: i32 = 100;

/// Seconds per regeneration tick: one energy every two minutes.
pub const REGEN_INTERVAL_SECS: i64 = 120;

/// Energy gained per elapsed interval.
pub const REGEN_RATE: i32 = 1;

/// Result of applying regeneration to a stored energy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergySnapshot {
    /// Current energy after regeneration, capped at the user's max.
    pub energy: i32,
    /// Whole seconds until the next regeneration tick.
    pub seconds_until_next_regen: i64,
    /// Regeneration timestamp to persist. Equal to `now` when at
    /// least one tick was gained, otherwise the stored value.
    pub last_regen: Timestamp,
}

/// Apply regeneration to a stored energy value.
///
/// Pure function of its inputs; calling it twice with the same
/// arguments yields the same snapshot. A `now` earlier than
/// `last_regen` (clock skew) is treated as zero elapsed time.
pub fn regenerate(
    stored_energy: i32,
    max_energy: i32,
    last_regen: Timestamp,
    now: Timestamp,
) -> EnergySnapshot {
    let elapsed_secs = (now - last_regen).num_seconds().max(0);
    let ticks = elapsed_secs / REGEN_INTERVAL_SECS;
    let gained = i32::try_from(ticks)
        .unwrap_or(i32::MAX)
        .saturating_mul(REGEN_RATE);

    let energy = stored_energy.saturating_add(gained).min(max_energy);
    let last_regen = if gained > 0 { now } else { last_regen };

    let since_tick = (now - last_regen).num_seconds().max(0) % REGEN_INTERVAL_SECS;
    let seconds_until_next_regen =
        (REGEN_INTERVAL_SECS - since_tick).clamp(0, REGEN_INTERVAL_SECS);

    EnergySnapshot {
        energy,
        seconds_until_next_regen,
        last_regen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn no_gain_before_first_interval_elapses() {
        let now = t0() + Duration::seconds(REGEN_INTERVAL_SECS - 1);
        let snap = regenerate(40, DEFAULT_MAX_ENERGY, t0(), now);

        assert_eq!(snap.energy, 40);
        // Timestamp unchanged: fractional progress is kept.
        assert_eq!(snap.last_regen, t0());
        assert_eq!(snap.seconds_until_next_regen, 1);
    }

    #[test]
    fn one_tick_after_one_interval() {
        let now = t0() + Duration::seconds(REGEN_INTERVAL_SECS);
        let snap = regenerate(40, DEFAULT_MAX_ENERGY, t0(), now);

        assert_eq!(snap.energy, 41);
        assert_eq!(snap.last_regen, now);
        assert_eq!(snap.seconds_until_next_regen, REGEN_INTERVAL_SECS);
    }

    #[test]
    fn multiple_ticks_accumulate() {
        let now = t0() + Duration::seconds(REGEN_INTERVAL_SECS * 5 + 30);
        let snap = regenerate(40, DEFAULT_MAX_ENERGY, t0(), now);

        assert_eq!(snap.energy, 45);
        assert_eq!(snap.last_regen, now);
    }

    #[test]
    fn saturates_at_max_energy() {
        let now = t0() + Duration::days(30);
        let snap = regenerate(3, DEFAULT_MAX_ENERGY, t0(), now);

        assert_eq!(snap.energy, DEFAULT_MAX_ENERGY);
    }

    #[test]
    fn full_user_stays_at_cap_after_gap() {
        // 2-minute gap with no prior activity: energy unchanged at the
        // cap, countdown resets toward the full interval.
        let now = t0() + Duration::seconds(REGEN_INTERVAL_SECS);
        let snap = regenerate(DEFAULT_MAX_ENERGY, DEFAULT_MAX_ENERGY, t0(), now);

        assert_eq!(snap.energy, DEFAULT_MAX_ENERGY);
        assert_eq!(snap.seconds_until_next_regen, REGEN_INTERVAL_SECS);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let now = t0() + Duration::seconds(500);
        let a = regenerate(10, DEFAULT_MAX_ENERGY, t0(), now);
        let b = regenerate(10, DEFAULT_MAX_ENERGY, t0(), now);

        assert_eq!(a, b);
    }

    #[test]
    fn monotonic_in_elapsed_time() {
        let mut previous = 0;
        for secs in (0..3600).step_by(17) {
            let now = t0() + Duration::seconds(secs);
            let snap = regenerate(10, DEFAULT_MAX_ENERGY, t0(), now);
            assert!(snap.energy >= previous, "energy regressed at {secs}s");
            previous = snap.energy;
        }
    }

    #[test]
    fn clock_skew_is_treated_as_zero_elapsed() {
        let now = t0() - Duration::seconds(300);
        let snap = regenerate(10, DEFAULT_MAX_ENERGY, t0(), now);

        assert_eq!(snap.energy, 10);
        assert_eq!(snap.last_regen, t0());
        assert_eq!(snap.seconds_until_next_regen, REGEN_INTERVAL_SECS);
    }
}
