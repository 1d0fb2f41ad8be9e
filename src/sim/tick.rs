//! Per-frame round update
//!
//! The phase is checked before anything moves, so a start press never
//! also moves the avatars on the same frame. A frame shows the phase it
//! updated: the scene is captured before any transition takes effect.

use rand::Rng;

use super::hearts::{drift, spawn_burst};
use super::motion;
use super::state::{GameEvent, RoundPhase, RoundState};
use crate::config::GameConfig;
use crate::input::TickInput;

/// Advance the round by one frame
pub fn tick<R: Rng + ?Sized>(
    state: &mut RoundState,
    input: &TickInput,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<GameEvent> {
    tick_with(state, input, config, rng, |_| {})
}

/// Advance the round by one frame, handing `draw` the scene of the phase
/// that ran
///
/// `draw` is called exactly once, after this phase's update and before any
/// transition (win spawn or reset) is applied.
pub fn tick_with<R, F>(
    state: &mut RoundState,
    input: &TickInput,
    config: &GameConfig,
    rng: &mut R,
    draw: F,
) -> Vec<GameEvent>
where
    R: Rng + ?Sized,
    F: FnOnce(&RoundState),
{
    let mut events = Vec::new();
    state.frame += 1;

    match state.phase {
        RoundPhase::NotStarted => {
            draw(state);
            if input.start_pressed() {
                state.phase = RoundPhase::Playing;
                log::info!("Round started");
                events.push(GameEvent::RoundStarted);
            }
        }

        RoundPhase::Playing => {
            let hit = motion::step(state, input, config);
            draw(state);
            if let Some(at) = hit {
                state.phase = RoundPhase::Won;
                state.wins += 1;
                state.hearts = spawn_burst(at, config, rng);
                log::info!("Round won at ({:.1}, {:.1})", at.x, at.y);
                events.push(GameEvent::RoundWon { at });
            }
        }

        RoundPhase::Won => {
            drift(&mut state.hearts, config.heart_drift);
            draw(state);

            if input.start_pressed() {
                state.reset_round(config);
                state.phase = RoundPhase::Playing;
                log::info!("Round reset");
                events.push(GameEvent::RoundReset);
            }
        }
    }

    events
}
