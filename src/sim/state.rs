//! Session state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Avatar, Coin, Hazard};
use super::registry::Registry;
use super::spawn::SpawnScheduler;
use crate::consts::*;

/// Current phase of the session.
///
/// `Won` and `Lost` are terminal: the simulation stops advancing and the
/// loop only services restart and quit input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Session parameters fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    pub viewport: Vec2,
    pub win_score: u32,
    pub avatar_speed: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32),
            win_score: WIN_SCORE,
            avatar_speed: AVATAR_SPEED,
        }
    }
}

/// Bounding-box dimensions per entity kind, taken from the loaded visual
/// assets once at startup. Keeps the simulation free of platform types.
#[derive(Debug, Clone, Copy)]
pub struct EntitySizes {
    pub avatar: (u32, u32),
    pub coin: (u32, u32),
    pub hazard: (u32, u32),
}

/// Complete session state, owned by the loop thread.
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub rules: Rules,
    pub sizes: EntitySizes,
    pub avatar: Avatar,
    pub coins: Registry<Coin>,
    pub hazards: Registry<Hazard>,
    pub score: u32,
    pub phase: GamePhase,
    pub scheduler: SpawnScheduler,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh session with the given seed.
    pub fn new(seed: u64, rules: Rules, sizes: EntitySizes) -> Self {
        Self {
            seed,
            rules,
            sizes,
            avatar: Avatar::new(sizes.avatar, rules.viewport, rules.avatar_speed),
            coins: Registry::new(),
            hazards: Registry::new(),
            score: 0,
            phase: GamePhase::Playing,
            scheduler: SpawnScheduler::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Re-initialize to construction-time state, equivalent to a fresh game.
    /// The next seed is drawn from the session RNG so restarts stay
    /// deterministic under a fixed initial seed.
    pub fn restart(&mut self) {
        let seed = self.rng.random::<u64>();
        log::info!("session restarted with seed {seed}");
        *self = Self::new(seed, self.rules, self.sizes);
    }

    pub fn spawn_coin(&mut self) {
        let coin = Coin::new(self.sizes.coin, self.rules.viewport, &mut self.rng);
        log::debug!("coin spawned at x = {}", coin.body().pos().x);
        self.coins.push(coin);
    }

    pub fn spawn_hazard(&mut self) {
        let hazard = Hazard::new(self.sizes.hazard, self.rules.viewport, &mut self.rng);
        log::debug!("hazard spawned at x = {}", hazard.body().pos().x);
        self.hazards.push(hazard);
    }
}

#[cfg(test)]
pub(crate) fn test_sizes() -> EntitySizes {
    EntitySizes {
        avatar: (64, 64),
        coin: (40, 40),
        hazard: (60, 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_defaults() {
        let state = GameState::new(5, Rules::default(), test_sizes());
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.coins.is_empty());
        assert!(state.hazards.is_empty());
        assert_eq!(state.scheduler.threshold(), 130);
        assert_eq!(state.scheduler.tint(), 0);
        assert_eq!(state.avatar.body().pos(), Vec2::new(0.0, 510.0));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(5, Rules::default(), test_sizes());
        state.score = 42;
        state.phase = GamePhase::Lost;
        state.spawn_coin();
        state.spawn_hazard();

        state.restart();

        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.coins.is_empty());
        assert!(state.hazards.is_empty());
        assert_eq!(state.scheduler.threshold(), 130);
        assert_eq!(state.scheduler.tint(), 0);
        assert_eq!(state.avatar.body().pos(), Vec2::new(0.0, 510.0));
    }

    #[test]
    fn test_spawns_enter_registries_in_order() {
        let mut state = GameState::new(5, Rules::default(), test_sizes());
        state.spawn_coin();
        state.spawn_coin();
        assert_eq!(state.coins.len(), 2);
        state.spawn_hazard();
        assert_eq!(state.hazards.len(), 1);
    }
}
