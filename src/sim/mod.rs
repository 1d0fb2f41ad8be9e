//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only, passed in by the caller
//! - No GPU or platform dependencies (draw lists only)

pub mod game;
pub mod hearts;
pub mod motion;
pub mod state;
pub mod tick;

pub use game::{Frame, Game};
pub use hearts::{drift, spawn_burst};
pub use motion::{avatars_collide, clamp_to_playfield, dpad_displacement};
pub use state::{Avatar, AvatarId, GameEvent, Heart, RoundPhase, RoundState};
pub use tick::{tick, tick_with};
