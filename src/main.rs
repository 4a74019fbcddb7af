//! Breakout headless runner
//!
//! Plays one session with an autopilot keeping the paddle under the ball and
//! logs how it went. Pass a JSON session config path to override defaults.

use std::process::ExitCode;

use breakout::SessionConfig;
use breakout::sim::{GamePhase, GameState, TickInput, tick};

/// Give up after this many ticks if the autopilot never drops the ball
const MAX_TICKS: u64 = 2_000_000;

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SessionConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SessionConfig::default(),
    };

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    while state.time_ticks < MAX_TICKS && !state.bricks.is_empty() {
        let input = autopilot(&state);
        if tick(&mut state, &input) == GamePhase::Ended {
            break;
        }
    }

    let scene = state.scene();
    log::info!(
        "Finished: {:?} after {} ticks, {} bricks destroyed, {} left, ball speed {:.3}",
        scene.phase,
        state.time_ticks,
        state.bricks_destroyed,
        scene.bricks.len(),
        state.ball.speed
    );
    println!(
        "{:?}: {} ticks, {} bricks left",
        scene.phase,
        state.time_ticks,
        scene.bricks.len()
    );

    ExitCode::SUCCESS
}

/// Center the paddle under the ball
fn autopilot(state: &GameState) -> TickInput {
    let x = state.ball.center().x - state.paddle.width() / 2.0;
    TickInput::at(x)
}
