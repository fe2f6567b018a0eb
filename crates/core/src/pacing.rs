//! Pacing module - score-driven scaling of tick interval and food lifetime
//!
//! Every food eaten multiplies both values by [`PACING_FACTOR`], so the game
//! speeds up and food gets scarcer as the score climbs. Both values are
//! strictly positive and monotonically non-increasing across a run. The
//! engine applies an interval change by canceling and rescheduling its tick
//! timer; food already on the grid keeps the deadline it was spawned with.

use crate::types::{TimeMs, BASE_FOOD_LIFETIME_MS, BASE_TICK_MS, PACING_FACTOR};

/// Live pacing values for the current run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingState {
    tick_interval_ms: TimeMs,
    food_lifetime_ms: TimeMs,
}

impl PacingState {
    /// Interval between simulation steps.
    pub fn tick_interval_ms(&self) -> TimeMs {
        self.tick_interval_ms
    }

    /// Lifetime assigned to food spawned from now on.
    pub fn food_lifetime_ms(&self) -> TimeMs {
        self.food_lifetime_ms
    }

    /// Tighten the pacing after a food was eaten.
    pub fn on_food_eaten(&mut self) {
        self.tick_interval_ms *= PACING_FACTOR;
        self.food_lifetime_ms *= PACING_FACTOR;
    }
}

impl Default for PacingState {
    fn default() -> Self {
        Self {
            tick_interval_ms: BASE_TICK_MS,
            food_lifetime_ms: BASE_FOOD_LIFETIME_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_base_constants() {
        let pacing = PacingState::default();
        assert_eq!(pacing.tick_interval_ms(), 100.0);
        assert_eq!(pacing.food_lifetime_ms(), 10_000.0);
    }

    #[test]
    fn each_food_scales_both_values() {
        let mut pacing = PacingState::default();

        pacing.on_food_eaten();
        assert!((pacing.tick_interval_ms() - 90.0).abs() < 1e-9);
        assert!((pacing.food_lifetime_ms() - 9_000.0).abs() < 1e-9);

        pacing.on_food_eaten();
        assert!((pacing.tick_interval_ms() - 81.0).abs() < 1e-9);
        assert!((pacing.food_lifetime_ms() - 8_100.0).abs() < 1e-9);
    }

    #[test]
    fn pacing_follows_the_power_law() {
        let mut pacing = PacingState::default();
        for _ in 0..10 {
            pacing.on_food_eaten();
        }
        let expected = 100.0 * 0.9f64.powi(10);
        assert!((pacing.tick_interval_ms() - expected).abs() < 1e-6);
        assert!((pacing.food_lifetime_ms() - expected * 100.0).abs() < 1e-4);
    }

    #[test]
    fn values_stay_positive() {
        let mut pacing = PacingState::default();
        for _ in 0..1000 {
            pacing.on_food_eaten();
        }
        assert!(pacing.tick_interval_ms() > 0.0);
        assert!(pacing.food_lifetime_ms() > 0.0);
    }
}
