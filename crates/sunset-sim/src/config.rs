//! Simulation configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sunset_core::constants::{ENEMY_ATTACK_INTERVAL_SECS, MAX_WAVES, WAVE_CLEAR_DELAY_SECS};
use sunset_core::enums::CameraMode;
use sunset_core::types::ModelBounds;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Number of waves before victory.
    pub max_waves: u32,
    /// Pause between clearing a wave and spawning the next.
    pub wave_clear_delay_secs: f32,
    /// Camera mode the player starts in.
    pub camera_mode: CameraMode,
    /// Whether enemies shoot at the player on their own.
    pub enemy_auto_attack: bool,
    pub enemy_attack_interval_secs: f32,
    /// Bounding box of the player model, from the asset loader.
    pub player_model_bounds: ModelBounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_waves: MAX_WAVES,
            wave_clear_delay_secs: WAVE_CLEAR_DELAY_SECS,
            camera_mode: CameraMode::ThirdPerson,
            enemy_auto_attack: true,
            enemy_attack_interval_secs: ENEMY_ATTACK_INTERVAL_SECS,
            player_model_bounds: ModelBounds::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SimConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_waves == 0 {
            return Err(ConfigError::Invalid {
                field: "max_waves",
                reason: "must be at least 1".into(),
            });
        }
        check_duration("wave_clear_delay_secs", self.wave_clear_delay_secs)?;
        check_duration(
            "enemy_attack_interval_secs",
            self.enemy_attack_interval_secs,
        )?;

        let bounds = &self.player_model_bounds;
        if !(bounds.min.is_finite() && bounds.max.is_finite()) || bounds.min.cmpgt(bounds.max).any()
        {
            return Err(ConfigError::Invalid {
                field: "player_model_bounds",
                reason: format!("min {} must not exceed max {}", bounds.min, bounds.max),
            });
        }
        Ok(())
    }
}

fn check_duration(field: &'static str, secs: f32) -> Result<(), ConfigError> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("expected a non-negative number of seconds, got {secs}"),
        });
    }
    Ok(())
}
