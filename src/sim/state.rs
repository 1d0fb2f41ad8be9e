//! Round state and core simulation types
//!
//! Everything a frame mutates lives in `RoundState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Title screen, waiting for a start button
    #[default]
    NotStarted,
    /// Avatars are steerable
    Playing,
    /// Avatars met, hearts are floating
    Won,
}

/// Which player an avatar belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarId {
    /// Red
    One,
    /// Green
    Two,
}

impl AvatarId {
    pub const ALL: [AvatarId; 2] = [AvatarId::One, AvatarId::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            AvatarId::One => 0,
            AvatarId::Two => 1,
        }
    }

    /// The avatar this player's A button rotates
    #[inline]
    pub fn other(self) -> AvatarId {
        match self {
            AvatarId::One => AvatarId::Two,
            AvatarId::Two => AvatarId::One,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AvatarId::One => "P1",
            AvatarId::Two => "P2",
        }
    }
}

/// A player-controlled sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub id: AvatarId,
    /// Centre, playfield coordinates (origin top-left, y down)
    pub pos: Vec2,
    /// Radians, only ever grows within a round
    pub rotation: f32,
    pub size: f32,
}

impl Avatar {
    pub fn new(id: AvatarId, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            pos,
            rotation: 0.0,
            size,
        }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }
}

/// A celebration heart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub pos: Vec2,
    pub size: f32,
    /// 0-255; set at spawn, never decays
    pub alpha: f32,
}

/// Something the driver may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Left the title screen
    RoundStarted,
    /// Avatars collided at this midpoint
    RoundWon { at: Vec2 },
    /// Restarted after a win
    RoundReset,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Indexed by `AvatarId::index`
    pub avatars: [Avatar; 2],
    /// Non-empty only while `Won`
    pub hearts: Vec<Heart>,
    /// Frames ticked since creation
    pub frame: u64,
    /// Rounds won this session
    pub wins: u32,
}

impl RoundState {
    pub fn new(config: &GameConfig) -> Self {
        let [p1, p2] = config.start_positions();
        Self {
            phase: RoundPhase::NotStarted,
            avatars: [
                Avatar::new(AvatarId::One, p1, config.avatar_size),
                Avatar::new(AvatarId::Two, p2, config.avatar_size),
            ],
            hearts: Vec::new(),
            frame: 0,
            wins: 0,
        }
    }

    #[inline]
    pub fn avatar(&self, id: AvatarId) -> &Avatar {
        &self.avatars[id.index()]
    }

    #[inline]
    pub fn avatar_mut(&mut self, id: AvatarId) -> &mut Avatar {
        &mut self.avatars[id.index()]
    }

    /// Midpoint between the two avatars
    pub fn midpoint(&self) -> Vec2 {
        (self.avatars[0].pos + self.avatars[1].pos) / 2.0
    }

    /// Put both avatars back on their marks and drop the hearts
    pub fn reset_round(&mut self, config: &GameConfig) {
        let starts = config.start_positions();
        for (avatar, start) in self.avatars.iter_mut().zip(starts) {
            avatar.pos = start;
            avatar.rotation = 0.0;
            avatar.size = config.avatar_size;
        }
        self.hearts.clear();
    }
}
