//! Probabilistic, ramping spawn scheduling
//!
//! Coins keep a fixed 1-in-61 chance per tick. Hazards start at 1-in-131 and
//! ramp: every two hazard spawns the threshold drops by one (floor 0) and the
//! screen tint rises by two (ceiling 255), a monotonic difficulty curve.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{COIN_SPAWN_ODDS, HAZARD_ODDS_START, RAMP_EVERY, TINT_STEP};

/// What the scheduler decided for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnDecision {
    pub coin: bool,
    pub hazard: bool,
}

#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    threshold: u32,
    since_ramp: u32,
    tint: u8,
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self {
            threshold: HAZARD_ODDS_START,
            since_ramp: 0,
            tint: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_threshold(threshold: u32) -> Self {
        Self {
            threshold,
            since_ramp: 0,
            tint: 0,
        }
    }

    /// Current hazard spawn threshold (chance is 1 in threshold + 1).
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Current screen tint ramp value.
    pub fn tint(&self) -> u8 {
        self.tint
    }

    /// Run one tick of spawn scheduling.
    ///
    /// Order matters and is kept stable for determinism: coin draw, then the
    /// ramp check, then the hazard draw. The ramp therefore lands on the tick
    /// after the second spawn, not on the spawning tick itself.
    pub fn poll(&mut self, rng: &mut Pcg32) -> SpawnDecision {
        let coin = rng.random_range(0..=COIN_SPAWN_ODDS) == COIN_SPAWN_ODDS;

        if self.since_ramp == RAMP_EVERY {
            self.threshold = self.threshold.saturating_sub(1);
            self.since_ramp = 0;
            self.tint = self.tint.saturating_add(TINT_STEP);
            log::debug!(
                "difficulty ramp: hazard threshold {}, tint {}",
                self.threshold,
                self.tint
            );
        }

        let hazard = rng.random_range(0..=self.threshold) == self.threshold;
        if hazard {
            self.since_ramp += 1;
        }

        SpawnDecision { coin, hazard }
    }
}
