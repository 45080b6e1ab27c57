//! Windowing/asset/input collaborator contracts
//!
//! The core consumes the outside world through this narrow trait: asset
//! dimension lookup at startup, a non-blocking event drain, frame submission,
//! buffer presentation, and the tick pacing primitive. A real backend wires
//! these to a window and renderer; the headless backend services tests and
//! the demo run.

pub mod headless;

pub use headless::HeadlessBackend;

use crate::error::GameError;
use crate::frame::Frame;

/// A loaded visual asset. Only the dimensions matter to the core: they fix
/// an entity's bounding box once at creation.
#[derive(Debug, Clone)]
pub struct Asset {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Keys the game recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    MoveLeft,
    MoveRight,
    Boost,
    Restart,
    Quit,
}

/// One input event from the platform queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window close request.
    Quit,
}

/// Contract implemented by the windowing/rendering layer.
///
/// Any `Err` is fatal to the run; the loop propagates it out unchanged.
pub trait Platform {
    /// Resolve a visual asset by name. Called once per entity kind at
    /// startup.
    fn load_asset(&mut self, name: &str) -> Result<Asset, GameError>;

    /// Drain all pending input events without blocking.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, GameError>;

    /// Submit one frame description for rendering.
    fn draw_frame(&mut self, frame: &Frame) -> Result<(), GameError>;

    /// Swap the rendered buffer onto the screen.
    fn present(&mut self) -> Result<(), GameError>;

    /// Block until the next tick boundary at the target rate. The loop's
    /// only suspension point.
    fn wait_for_tick(&mut self, hz: u32);
}
