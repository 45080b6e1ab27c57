//! Touch and ground classification between the avatar and falling entities
//!
//! Positions are upper-left box corners, so the overlap test uses an
//! asymmetric tolerance: whichever box is ahead on X contributes its own
//! width. The vertical test only covers the falling-onto-the-avatar case and
//! uses the falling entity's height alone.

use crate::consts::DESPAWN_MARGIN;
use super::entity::Body;

/// Outcome of classifying a falling entity against the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Reached near-ground without touching; remove it.
    Despawn,
    /// Overlapping the avatar.
    Touching,
    /// Neither.
    None,
}

/// Classify `entity` against `avatar`. Pure and idempotent.
///
/// The near-ground check comes first: an entity low enough to despawn is
/// never reported as touching, regardless of X.
pub fn classify(entity: &Body, avatar: &Body) -> Contact {
    let e = entity.pos();
    let a = avatar.pos();

    if e.y >= entity.bounds().y - entity.height() - DESPAWN_MARGIN {
        return Contact::Despawn;
    }

    let x_gap = (e.x - a.x).abs();
    let x_tol = if e.x > a.x {
        avatar.width()
    } else {
        entity.width()
    };
    let y_gap = (e.y - a.y).abs();
    let y_tol = entity.height();

    if y_gap - y_tol <= 0.0 && x_gap - x_tol <= 0.0 {
        return Contact::Touching;
    }
    Contact::None
}
