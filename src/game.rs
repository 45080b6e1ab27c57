//! The fixed-rate game loop
//!
//! Single-threaded cooperative loop: drain input, advance the simulation one
//! tick, emit a frame, present, wait for the next tick boundary. Restart and
//! quit are serviced in every phase; the simulation itself only advances
//! while playing. Platform faults propagate out and end the run.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::*;
use crate::error::GameError;
use crate::frame;
use crate::platform::{InputEvent, Key, Platform};
use crate::settings::Settings;
use crate::sim::{EntitySizes, GamePhase, GameState, TickInput, tick};

/// Held movement keys, latched across ticks from key down/up events.
#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    left: bool,
    right: bool,
    boost: bool,
}

impl HeldKeys {
    fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            boost: self.boost,
        }
    }
}

/// What the drained event queue asks of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopAction {
    Continue,
    Restart,
    Quit,
}

pub struct Game<P: Platform> {
    platform: P,
    state: GameState,
    held: HeldKeys,
    tick_hz: u32,
}

impl<P: Platform> Game<P> {
    /// Load the entity assets and build a fresh session.
    pub fn new(mut platform: P, settings: &Settings, seed: u64) -> Result<Self, GameError> {
        let sizes = load_entity_sizes(&mut platform)?;
        let state = GameState::new(seed, settings.rules(), sizes);
        log::info!("session created with seed {seed}");
        Ok(Self {
            platform,
            state,
            held: HeldKeys::default(),
            tick_hz: settings.tick_hz,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Run until quit input or a platform fault.
    pub fn run(&mut self) -> Result<(), GameError> {
        loop {
            match self.drain_events()? {
                LoopAction::Quit => break,
                LoopAction::Restart => {
                    self.held = HeldKeys::default();
                    self.state.restart();
                }
                LoopAction::Continue => {}
            }

            if self.state.phase == GamePhase::Playing {
                tick(&mut self.state, &self.held.tick_input());
            }

            let frame = frame::compose(&self.state);
            self.platform.draw_frame(&frame)?;
            self.platform.present()?;
            self.platform.wait_for_tick(self.tick_hz);
        }
        log::info!("loop exited after quit request");
        Ok(())
    }

    /// Drain the whole pending queue, latching held keys. Quit wins over
    /// restart if both arrive in the same batch.
    fn drain_events(&mut self) -> Result<LoopAction, GameError> {
        let mut action = LoopAction::Continue;
        for event in self.platform.poll_events()? {
            match event {
                InputEvent::KeyDown(Key::MoveLeft) => self.held.left = true,
                InputEvent::KeyUp(Key::MoveLeft) => self.held.left = false,
                InputEvent::KeyDown(Key::MoveRight) => self.held.right = true,
                InputEvent::KeyUp(Key::MoveRight) => self.held.right = false,
                InputEvent::KeyDown(Key::Boost) => self.held.boost = true,
                InputEvent::KeyUp(Key::Boost) => self.held.boost = false,
                InputEvent::KeyDown(Key::Restart) => {
                    if action != LoopAction::Quit {
                        action = LoopAction::Restart;
                    }
                }
                InputEvent::KeyDown(Key::Quit) | InputEvent::Quit => {
                    action = LoopAction::Quit;
                }
                InputEvent::KeyUp(Key::Restart) | InputEvent::KeyUp(Key::Quit) => {}
            }
        }
        Ok(action)
    }
}

/// Fix each entity kind's bounding box from its visual asset.
fn load_entity_sizes<P: Platform>(platform: &mut P) -> Result<EntitySizes, GameError> {
    let avatar = platform.load_asset(AVATAR_ASSET)?;
    let coin = platform.load_asset(COIN_ASSET)?;
    let hazard = platform.load_asset(HAZARD_ASSET)?;
    log::debug!(
        "assets loaded: avatar {}x{}, coin {}x{}, hazard {}x{}",
        avatar.width,
        avatar.height,
        coin.width,
        coin.height,
        hazard.width,
        hazard.height
    );
    Ok(EntitySizes {
        avatar: (avatar.width, avatar.height),
        coin: (coin.width, coin.height),
        hazard: (hazard.width, hazard.height),
    })
}

/// Seed for a fresh session when none is configured.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
