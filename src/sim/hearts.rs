//! Celebration hearts
//!
//! One burst per win, jittered around the meeting point. Hearts only drift
//! upward; they are dropped wholesale when the next round starts.

use glam::Vec2;
use rand::Rng;

use super::state::Heart;
use crate::config::GameConfig;

/// Create a burst of hearts around `center`
pub fn spawn_burst<R: Rng + ?Sized>(center: Vec2, config: &GameConfig, rng: &mut R) -> Vec<Heart> {
    let jitter = config.heart_jitter;
    let hearts: Vec<Heart> = (0..config.heart_count)
        .map(|_| Heart {
            pos: center
                + Vec2::new(
                    rng.random_range(-jitter..=jitter),
                    rng.random_range(-jitter..=jitter),
                ),
            size: rng.random_range(config.heart_size_min..=config.heart_size_max),
            alpha: config.heart_alpha,
        })
        .collect();

    log::debug!("Spawned {} hearts at ({:.1}, {:.1})", hearts.len(), center.x, center.y);
    hearts
}

/// Float every heart up by `drift`
pub fn drift(hearts: &mut [Heart], drift: f32) {
    for heart in hearts {
        heart.pos.y -= drift;
    }
}
