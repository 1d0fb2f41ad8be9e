//! Love Wins - a two-player cooperative arcade mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (round phases, motion, hearts)
//! - `renderer`: Backend-agnostic draw commands and heart geometry
//! - `input`: Per-frame input snapshots and keyboard latch
//! - `config`: Data-driven game tunables

pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{InputLatch, PlayerInput, TickInput};
pub use sim::{Game, GameEvent, RoundPhase, RoundState};

/// Default game tunables
pub mod consts {
    /// Logical canvas size (arcade cabinet resolution)
    pub const PLAYFIELD_WIDTH: f32 = 336.0;
    pub const PLAYFIELD_HEIGHT: f32 = 262.0;

    /// Avatar defaults
    pub const AVATAR_SIZE: f32 = 50.0;
    /// Per-axis displacement per frame for each held direction
    pub const AVATAR_SPEED: f32 = 3.0;
    /// Radians added per frame while the opposing player holds A
    pub const ROTATE_STEP: f32 = 0.15;
    /// Avatars collide below this fraction of their size
    pub const COLLISION_FACTOR: f32 = 0.8;

    /// Heart burst defaults
    pub const HEART_COUNT: usize = 15;
    pub const HEART_JITTER: f32 = 50.0;
    pub const HEART_SIZE_MIN: f32 = 15.0;
    pub const HEART_SIZE_MAX: f32 = 35.0;
    pub const HEART_ALPHA: f32 = 255.0;
    /// Upward drift per frame (screen y decreases)
    pub const HEART_DRIFT: f32 = 0.5;
}
