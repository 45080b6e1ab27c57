//! Per-frame simulation advance
//!
//! One call = one loop iteration's worth of simulation: avatar input, coin
//! motion and collection, the win check, hazard motion and the loss check,
//! then spawn scheduling. Terminal phases are inert here; restart and quit
//! are serviced by the loop, not the tick.

use super::collision::{Contact, classify};
use super::state::{GamePhase, GameState};

/// Held movement input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

/// Advance the session by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase.is_over() {
        return;
    }

    state.avatar.apply_input(input);

    // Coins: step, classify, collect. Removal is deferred past the scan.
    let mut doomed = Vec::new();
    let mut collected = 0;
    for (idx, coin) in state.coins.iter_mut().enumerate() {
        coin.step();
        match classify(coin.body(), state.avatar.body()) {
            Contact::Despawn => doomed.push(idx),
            Contact::Touching => {
                doomed.push(idx);
                collected += 1;
            }
            Contact::None => {}
        }
    }
    state.coins.remove_batch(&mut doomed);
    state.score += collected;

    // Win is evaluated after collection and before hazard processing, so a
    // threshold-crossing frame ends Won even with a hazard on the avatar.
    // Coins banked past the threshold stay counted.
    if state.score >= state.rules.win_score {
        state.phase = GamePhase::Won;
        log::info!("session won with {} coins", state.score);
        return;
    }

    // Hazards: a touch ends the session and stops the scan; the rest of the
    // registry keeps last tick's positions for the terminal frame.
    let mut doomed = Vec::new();
    for (idx, hazard) in state.hazards.iter_mut().enumerate() {
        hazard.step();
        match classify(hazard.body(), state.avatar.body()) {
            Contact::Despawn => doomed.push(idx),
            Contact::Touching => {
                state.phase = GamePhase::Lost;
                break;
            }
            Contact::None => {}
        }
    }
    state.hazards.remove_batch(&mut doomed);
    if state.phase == GamePhase::Lost {
        log::info!("session lost with {} coins", state.score);
        return;
    }

    let decision = state.scheduler.poll(&mut state.rng);
    if decision.coin {
        state.spawn_coin();
    }
    if decision.hazard {
        state.spawn_hazard();
    }
}
