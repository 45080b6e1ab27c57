//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Contact, classify};
pub use entity::{Avatar, Body, Coin, Hazard};
pub use registry::Registry;
pub use spawn::{SpawnDecision, SpawnScheduler};
pub use state::{EntitySizes, GamePhase, GameState, Rules};
pub use tick::{TickInput, tick};
