//! Coinfall - a falling-coin arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawn scheduling, game state)
//! - `frame`: Per-tick frame description handed to the rendering collaborator
//! - `game`: The fixed-rate game loop (input latching, restart/quit, pacing)
//! - `platform`: Windowing/asset/input collaborator contracts
//! - `settings`: File-backed configuration

pub mod error;
pub mod frame;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default viewport resolution
    pub const VIEWPORT_WIDTH: u32 = 800;
    pub const VIEWPORT_HEIGHT: u32 = 600;

    /// Target loop rate (iterations per second)
    pub const TICK_HZ: u32 = 60;

    /// Coins needed to win
    pub const WIN_SCORE: u32 = 100;

    /// Avatar defaults
    pub const AVATAR_SPEED: f32 = 5.0;
    /// Avatar starts this far above the viewport bottom
    pub const AVATAR_START_LIFT: f32 = 90.0;
    /// Extra displacement applied when boost coincides with a move key
    pub const TELEPORT_DISTANCE: f32 = 70.0;
    /// Wall clearance required before a teleport is allowed
    pub const TELEPORT_CLEARANCE: f32 = 100.0;

    /// Falling-entity defaults
    pub const COIN_FALL_SPEED: f32 = 4.0;
    pub const HAZARD_FALL_SPEED: f32 = 2.0;
    /// Phase increment per hazard step (radians)
    pub const HAZARD_PHASE_STEP: f32 = 0.2;

    /// Horizontal margin kept free when picking a spawn column
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Falling entities enter this far above the visible area
    pub const SPAWN_HEIGHT: f32 = -200.0;
    /// Entities this close to the viewport bottom are despawned
    pub const DESPAWN_MARGIN: f32 = 20.0;

    /// Coin spawn draw: uniform in [0, COIN_SPAWN_ODDS], spawn on a max roll
    pub const COIN_SPAWN_ODDS: u32 = 60;
    /// Hazard spawn threshold at session start; ramps down over time
    pub const HAZARD_ODDS_START: u32 = 130;
    /// Hazard spawns between difficulty ramps
    pub const RAMP_EVERY: u32 = 2;
    /// Screen tint increase per ramp
    pub const TINT_STEP: u8 = 2;

    /// Visual asset names resolved by the platform layer
    pub const AVATAR_ASSET: &str = "avatar.png";
    pub const COIN_ASSET: &str = "coin.png";
    pub const HAZARD_ASSET: &str = "hazard.png";
}
