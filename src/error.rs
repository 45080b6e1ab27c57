//! Fatal error taxonomy
//!
//! The simulation itself is deterministic arithmetic and never fails; every
//! failure originates in a platform collaborator. There is no degraded mode,
//! so all of these abort the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A visual asset could not be loaded at startup.
    #[error("failed to load asset `{name}`: {reason}")]
    AssetLoad { name: String, reason: String },

    /// The display surface could not be created.
    #[error("display surface could not be created: {0}")]
    SurfaceInit(String),

    /// The renderer rejected a frame mid-loop.
    #[error("render fault: {0}")]
    Render(String),

    /// The input queue could not be drained.
    #[error("input fault: {0}")]
    Input(String),
}
