//! Coinfall entry point
//!
//! No windowing backend is wired in yet; the binary runs a scripted headless
//! session to exercise the full loop, mirroring how the game will drive a
//! real backend once one is integrated.

use coinfall::game::{Game, clock_seed};
use coinfall::platform::{HeadlessBackend, InputEvent, Key};
use coinfall::settings::Settings;

fn main() {
    env_logger::init();
    log::info!("Coinfall starting (headless demo mode)");

    let settings = Settings::load();
    let seed = clock_seed();

    // Drift right with a couple of boost hops, then idle until the script
    // runs dry and the backend requests quit.
    let mut script = vec![vec![InputEvent::KeyDown(Key::MoveRight)]];
    script.extend(std::iter::repeat_with(Vec::new).take(40));
    script.push(vec![InputEvent::KeyDown(Key::Boost)]);
    script.extend(std::iter::repeat_with(Vec::new).take(10));
    script.push(vec![
        InputEvent::KeyUp(Key::Boost),
        InputEvent::KeyUp(Key::MoveRight),
    ]);
    script.extend(std::iter::repeat_with(Vec::new).take(540));
    let backend = HeadlessBackend::scripted(script);

    let mut game = match Game::new(backend, &settings, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = game.run() {
        log::error!("run aborted: {err}");
        std::process::exit(1);
    }

    let state = game.state();
    log::info!(
        "demo finished: {} frames, score {}, phase {:?}, hazard threshold {}",
        game.platform().frames.len(),
        state.score,
        state.phase,
        state.scheduler.threshold()
    );
}
