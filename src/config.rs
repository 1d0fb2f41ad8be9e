//! Game tunables
//!
//! Persisted in LocalStorage on the web so a cabinet can be retuned
//! without rebuilding.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a config was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// All tunables the simulation reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Avatars ===
    pub avatar_size: f32,
    pub speed: f32,
    pub rotate_step: f32,
    pub collision_factor: f32,

    // === Hearts ===
    pub heart_count: usize,
    pub heart_jitter: f32,
    pub heart_size_min: f32,
    pub heart_size_max: f32,
    pub heart_alpha: f32,
    pub heart_drift: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            avatar_size: AVATAR_SIZE,
            speed: AVATAR_SPEED,
            rotate_step: ROTATE_STEP,
            collision_factor: COLLISION_FACTOR,

            heart_count: HEART_COUNT,
            heart_jitter: HEART_JITTER,
            heart_size_min: HEART_SIZE_MIN,
            heart_size_max: HEART_SIZE_MAX,
            heart_alpha: HEART_ALPHA,
            heart_drift: HEART_DRIFT,
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "love_wins_config";

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the tunables describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::Invalid("playfield dimensions must be positive"));
        }
        if !positive(self.avatar_size) {
            return Err(ConfigError::Invalid("avatar size must be positive"));
        }
        if self.avatar_size > self.width.min(self.height) {
            return Err(ConfigError::Invalid("avatar does not fit in the playfield"));
        }
        if !non_negative(self.speed) {
            return Err(ConfigError::Invalid("speed must not be negative"));
        }
        if !self.rotate_step.is_finite() {
            return Err(ConfigError::Invalid("rotate step must be finite"));
        }
        if !positive(self.collision_factor) {
            return Err(ConfigError::Invalid("collision factor must be positive"));
        }
        if !non_negative(self.heart_jitter) || !non_negative(self.heart_drift) {
            return Err(ConfigError::Invalid("heart jitter and drift must not be negative"));
        }
        if !positive(self.heart_size_min) || self.heart_size_min > self.heart_size_max {
            return Err(ConfigError::Invalid("heart size range is empty"));
        }
        if !self.heart_size_max.is_finite() || !non_negative(self.heart_alpha) {
            return Err(ConfigError::Invalid("heart size and alpha must be finite"));
        }
        Ok(())
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.avatar_size / 2.0
    }

    /// Centre distance below which the avatars collide
    #[inline]
    pub fn collision_distance(&self) -> f32 {
        self.avatar_size * self.collision_factor
    }

    /// Round start positions for Player 1 and Player 2
    pub fn start_positions(&self) -> [Vec2; 2] {
        [
            Vec2::new(self.width / 4.0, self.height / 2.0),
            Vec2::new(self.width * 3.0 / 4.0, self.height / 2.0),
        ]
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cabinet() {
        let config = GameConfig::default();
        assert_eq!(config.width, 336.0);
        assert_eq!(config.height, 262.0);
        assert_eq!(config.half_size(), 25.0);
        assert!((config.collision_distance() - 40.0).abs() < 1e-5);
        assert_eq!(
            config.start_positions(),
            [Vec2::new(84.0, 131.0), Vec2::new(252.0, 131.0)]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = GameConfig::from_json(r#"{ "speed": 5.0 }"#).unwrap();
        assert_eq!(config.speed, 5.0);
        assert_eq!(config.heart_count, HEART_COUNT);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_avatar() {
        let config = GameConfig {
            avatar_size: 300.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_heart_sizes() {
        let config = GameConfig {
            heart_size_min: 40.0,
            heart_size_max: 10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip_keeps_values() {
        let config = GameConfig {
            rotate_step: 0.3,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
