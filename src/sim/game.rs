//! Game controller
//!
//! Owns the config, the round state and the seeded RNG. A driver calls
//! `Game::tick` once per display frame and draws the returned commands.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, RoundPhase, RoundState};
use super::tick::tick_with;
use crate::config::{ConfigError, GameConfig};
use crate::input::TickInput;
use crate::renderer::{DrawCommand, build_frame};

/// Output of one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub events: Vec<GameEvent>,
    pub commands: Vec<DrawCommand>,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: RoundState,
    rng: Pcg32,
    seed: u64,
}

impl Game {
    /// Create a game with default tunables
    pub fn new(seed: u64) -> Self {
        Self::from_parts(GameConfig::default(), seed)
    }

    /// Create a game with custom tunables, rejecting configs the simulation
    /// cannot run
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, seed))
    }

    fn from_parts(config: GameConfig, seed: u64) -> Self {
        log::debug!("New game (seed {})", seed);
        Self {
            state: RoundState::new(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Advance one frame and build its draw list
    ///
    /// The draw list shows the phase this frame updated, so the collision
    /// frame still shows the playing scene and the restart frame still shows
    /// the hearts.
    pub fn tick(&mut self, input: &TickInput) -> Frame {
        let config = &self.config;
        let mut commands = Vec::new();
        let events = tick_with(&mut self.state, input, config, &mut self.rng, |state| {
            commands = build_frame(state, config);
        });
        Frame { events, commands }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn start() -> TickInput {
        TickInput {
            two_player_start: true,
            ..Default::default()
        }
    }

    fn closing() -> TickInput {
        let mut input = TickInput::default();
        input.players[0].right = true;
        input.players[1].left = true;
        input
    }

    #[test]
    fn test_full_round() {
        let mut game = Game::new(2024);
        assert_eq!(game.phase(), RoundPhase::NotStarted);

        let frame = game.tick(&start());
        assert_eq!(frame.events, vec![GameEvent::RoundStarted]);
        assert_eq!(game.phase(), RoundPhase::Playing);
        assert_eq!(game.state().avatars[0].pos, Vec2::new(84.0, 131.0));
        assert_eq!(game.state().avatars[1].pos, Vec2::new(252.0, 131.0));

        let mut frames = 0;
        while game.phase() == RoundPhase::Playing {
            game.tick(&closing());
            frames += 1;
            assert!(frames < 100, "avatars never met");
        }
        assert_eq!(game.phase(), RoundPhase::Won);
        assert_eq!(game.state().hearts.len(), 15);
        let [p1, p2] = &game.state().avatars;
        assert!(p1.pos.distance(p2.pos) < 40.0);

        let frame = game.tick(&start());
        assert_eq!(frame.events, vec![GameEvent::RoundReset]);
        assert_eq!(game.phase(), RoundPhase::Playing);
        assert_eq!(game.state().avatars[0].pos, Vec2::new(84.0, 131.0));
        assert_eq!(game.state().avatars[1].pos, Vec2::new(252.0, 131.0));
        assert!(game.state().hearts.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two games with the same seed produce identical hearts
        let mut a = Game::new(99999);
        let mut b = Game::new(99999);

        let mut script = vec![start()];
        script.extend(std::iter::repeat_n(closing(), 30));
        for input in &script {
            a.tick(input);
            b.tick(input);
        }

        assert_eq!(a.phase(), RoundPhase::Won);
        assert_eq!(a.state().hearts, b.state().hearts);
        assert_eq!(a.state().frame, b.state().frame);
    }

    fn count_hearts(frame: &Frame) -> usize {
        frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Heart { .. }))
            .count()
    }

    fn count_labels(frame: &Frame) -> usize {
        frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { text: "P1" | "P2", .. }))
            .count()
    }

    #[test]
    fn test_won_frame_draws_hearts() {
        let mut game = Game::new(1);
        game.tick(&start());
        while game.phase() == RoundPhase::Playing {
            game.tick(&closing());
        }
        let frame = game.tick(&TickInput::default());
        assert_eq!(count_hearts(&frame), 15);
    }

    #[test]
    fn test_transition_frames_draw_the_phase_that_ran() {
        let mut game = Game::new(3);
        game.tick(&start());

        // Collision frame: playing scene with labels, no hearts yet
        let mut frame = game.tick(&closing());
        while frame.events.is_empty() {
            frame = game.tick(&closing());
        }
        assert!(matches!(frame.events[..], [GameEvent::RoundWon { .. }]));
        assert_eq!(count_hearts(&frame), 0);
        assert_eq!(count_labels(&frame), 2);

        // Restart frame: won scene with every heart, no labels
        let frame = game.tick(&start());
        assert_eq!(frame.events, vec![GameEvent::RoundReset]);
        assert_eq!(count_hearts(&frame), 15);
        assert_eq!(count_labels(&frame), 0);
        assert!(game.state().hearts.is_empty());

        // Next frame is a normal playing frame again
        let frame = game.tick(&TickInput::default());
        assert_eq!(count_hearts(&frame), 0);
        assert_eq!(count_labels(&frame), 2);
    }

    #[test]
    fn test_with_config_rejects_oversized_avatar() {
        let config = GameConfig {
            avatar_size: 400.0,
            ..Default::default()
        };
        assert!(matches!(
            Game::with_config(config, 1),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_with_config_rejects_inverted_heart_sizes() {
        let config = GameConfig {
            heart_size_min: 35.0,
            heart_size_max: 15.0,
            ..Default::default()
        };
        assert!(Game::with_config(config, 1).is_err());
    }

    #[test]
    fn test_custom_config_is_used() {
        let config = GameConfig {
            heart_count: 3,
            ..Default::default()
        };
        let mut game = Game::with_config(config, 5).unwrap();
        game.tick(&start());
        while game.phase() == RoundPhase::Playing {
            game.tick(&closing());
        }
        assert_eq!(game.state().hearts.len(), 3);
        assert_eq!(game.config().heart_count, 3);
        assert_eq!(game.seed(), 5);
    }
}
