//! Avatar motion and collision
//!
//! Runs only while a round is `Playing`. Movement is per axis with no
//! normalization, so diagonals are faster than straight lines.

use glam::Vec2;

use super::state::{Avatar, AvatarId, RoundState};
use crate::config::GameConfig;
use crate::input::{PlayerInput, TickInput};

/// Per-frame displacement from a d-pad (y grows downward)
pub fn dpad_displacement(input: &PlayerInput, speed: f32) -> Vec2 {
    let mut delta = Vec2::ZERO;
    if input.up {
        delta.y -= speed;
    }
    if input.down {
        delta.y += speed;
    }
    if input.left {
        delta.x -= speed;
    }
    if input.right {
        delta.x += speed;
    }
    delta
}

/// Keep an avatar fully on screen (clamp, no bounce or wrap)
pub fn clamp_to_playfield(avatar: &mut Avatar, width: f32, height: f32) {
    let half = avatar.half_size();
    avatar.pos.x = avatar.pos.x.clamp(half, width - half);
    avatar.pos.y = avatar.pos.y.clamp(half, height - half);
}

/// True once the centres are strictly closer than `threshold`
#[inline]
pub fn avatars_collide(a: &Avatar, b: &Avatar, threshold: f32) -> bool {
    a.pos.distance(b.pos) < threshold
}

/// Advance both avatars by one frame
///
/// Returns the collision midpoint if the avatars now overlap.
pub fn step(state: &mut RoundState, input: &TickInput, config: &GameConfig) -> Option<Vec2> {
    for id in AvatarId::ALL {
        let delta = dpad_displacement(&input.players[id.index()], config.speed);
        state.avatar_mut(id).pos += delta;
    }

    // Each player's A spins the partner, never themselves
    for id in AvatarId::ALL {
        if input.players[id.index()].action {
            state.avatar_mut(id.other()).rotation += config.rotate_step;
        }
    }

    for avatar in &mut state.avatars {
        clamp_to_playfield(avatar, config.width, config.height);
    }

    let [p1, p2] = &state.avatars;
    avatars_collide(p1, p2, config.collision_distance()).then(|| state.midpoint())
}
