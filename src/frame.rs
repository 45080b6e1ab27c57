//! Per-tick frame description
//!
//! The loop emits one of these per iteration; the rendering collaborator
//! turns it into pixels. Sprites carry kind + position, overlays carry text +
//! anchor, and the tint value drives the background fill.

use glam::Vec2;

use crate::sim::{GamePhase, GameState};

/// Which image a sprite instance refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Avatar,
    Coin,
    Hazard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Upper-left corner in viewport coordinates.
    pub pos: Vec2,
}

/// Where an overlay text is placed; the renderer resolves exact pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    Center,
    LowerCenter,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub sprites: Vec<Sprite>,
    pub overlays: Vec<Overlay>,
    /// Background tint ramp value (0-255).
    pub tint: u8,
}

/// Build the frame description for the current state.
pub fn compose(state: &GameState) -> Frame {
    let mut sprites = Vec::with_capacity(1 + state.coins.len() + state.hazards.len());
    sprites.push(Sprite {
        kind: SpriteKind::Avatar,
        pos: state.avatar.body().pos(),
    });
    for coin in state.coins.iter() {
        sprites.push(Sprite {
            kind: SpriteKind::Coin,
            pos: coin.body().pos(),
        });
    }
    for hazard in state.hazards.iter() {
        sprites.push(Sprite {
            kind: SpriteKind::Hazard,
            pos: hazard.body().pos(),
        });
    }

    let mut overlays = vec![
        Overlay {
            text: format!("Coins collected: {}", state.score),
            anchor: Anchor::TopLeft,
        },
        Overlay {
            text: "F2 to restart".to_owned(),
            anchor: Anchor::TopCenter,
        },
        Overlay {
            text: "Esc to quit".to_owned(),
            anchor: Anchor::TopRight,
        },
    ];

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Won => end_overlays(&mut overlays, "YOU WON THE GAME"),
        GamePhase::Lost => end_overlays(&mut overlays, "YOU WERE CAUGHT"),
    }

    Frame {
        sprites,
        overlays,
        tint: state.scheduler.tint(),
    }
}

fn end_overlays(overlays: &mut Vec<Overlay>, banner: &str) {
    overlays.push(Overlay {
        text: banner.to_owned(),
        anchor: Anchor::Center,
    });
    overlays.push(Overlay {
        text: "Press F2 to restart, Esc to quit".to_owned(),
        anchor: Anchor::LowerCenter,
    });
    overlays.push(Overlay {
        text: "Hold boost while moving to teleport a short distance".to_owned(),
        anchor: Anchor::Bottom,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Rules, state::test_sizes};

    #[test]
    fn test_compose_lists_all_entities() {
        let mut state = GameState::new(5, Rules::default(), test_sizes());
        state.spawn_coin();
        state.spawn_coin();
        state.spawn_hazard();

        let frame = compose(&state);
        assert_eq!(frame.sprites.len(), 4);
        assert_eq!(frame.sprites[0].kind, SpriteKind::Avatar);
        assert_eq!(frame.tint, 0);
    }

    #[test]
    fn test_score_overlay_tracks_state() {
        let mut state = GameState::new(5, Rules::default(), test_sizes());
        state.score = 17;
        let frame = compose(&state);
        assert!(
            frame
                .overlays
                .iter()
                .any(|o| o.text == "Coins collected: 17" && o.anchor == Anchor::TopLeft)
        );
    }

    #[test]
    fn test_terminal_banner() {
        let mut state = GameState::new(5, Rules::default(), test_sizes());
        state.phase = GamePhase::Won;
        let frame = compose(&state);
        assert!(
            frame
                .overlays
                .iter()
                .any(|o| o.text == "YOU WON THE GAME" && o.anchor == Anchor::Center)
        );

        state.phase = GamePhase::Lost;
        let frame = compose(&state);
        assert!(frame.overlays.iter().any(|o| o.text == "YOU WERE CAUGHT"));
    }
}
