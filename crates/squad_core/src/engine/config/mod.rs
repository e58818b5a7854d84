//! # Tactics Configuration Module
//!
//! Every numeric tolerance the decision layers read lives here, grouped by
//! concern, with units documented on each field.
//!
//! ## Presets
//! - `balanced()`: default tuning
//! - `cautious()`: keeps the ball, commits later, presses less
//! - `aggressive()`: shoots and dribbles more, presses higher
//!
//! ## Usage
//! ```rust
//! use squad_core::engine::config::TacticsConfig;
//!
//! let config = TacticsConfig::default();
//! let aggressive = TacticsConfig::aggressive();
//! assert!(aggressive.validate().is_ok());
//! ```
//!
//! ## Environment Variables
//!
//! - `SQUAD_TACTICS_PROFILE`: Select preset (balanced, cautious, aggressive)

mod distance_config;
mod positioning_config;
mod utility_config;

pub use distance_config::DistanceConfig;
pub use positioning_config::{AngleConfig, FatigueConfig, PositioningConfig};
pub use utility_config::{DribbleWeights, PassWeights, ShotWeights, UtilityConfig};

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ConfigError;

/// Environment variable naming the preset used by `from_env_or_default`
pub const PROFILE_ENV_VAR: &str = "SQUAD_TACTICS_PROFILE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TacticsConfig {
    pub distance: DistanceConfig,
    pub angle: AngleConfig,
    pub positioning: PositioningConfig,
    pub utility: UtilityConfig,
    pub fatigue: FatigueConfig,
}

impl TacticsConfig {
    pub fn balanced() -> Self {
        Self::default()
    }

    pub fn cautious() -> Self {
        let mut cfg = Self::default();
        cfg.distance.pressure_distance = 0.06;
        cfg.distance.shot_range = 0.25;
        cfg.positioning.mid_block_x = -0.3;
        cfg.utility.pass.lane_blocked = -1.5;
        for profile in [
            &mut cfg.utility.roles.goalkeeper,
            &mut cfg.utility.roles.centre_back,
            &mut cfg.utility.roles.full_back,
            &mut cfg.utility.roles.defence_mid,
            &mut cfg.utility.roles.central_mid,
            &mut cfg.utility.roles.wide_mid,
            &mut cfg.utility.roles.attack_mid,
            &mut cfg.utility.roles.forward,
        ] {
            profile.commit_threshold += 0.05;
            profile.dribble_bias -= 0.05;
            profile.tight_pressure_distance += 0.005;
        }
        cfg
    }

    pub fn aggressive() -> Self {
        let mut cfg = Self::default();
        cfg.distance.shot_range = 0.35;
        cfg.positioning.mid_block_x = -0.1;
        cfg.positioning.defensive_line_min_x = -0.8;
        cfg.utility.shot.close_range_bonus = 0.5;
        cfg.utility.roles.forward.shot_multiplier = 1.5;
        cfg.utility.roles.attack_mid.shot_multiplier = 1.2;
        cfg.utility.roles.attack_mid.dribble_bias = 0.2;
        cfg.utility.roles.central_mid.press_trigger_scale = 2.0;
        cfg.utility.roles.forward.press_trigger_scale = 1.5;
        cfg.fatigue.tired_threshold = 0.6;
        cfg
    }

    /// Load preset from environment variable or use default
    pub fn from_env_or_default() -> Self {
        let profile = env::var(PROFILE_ENV_VAR).unwrap_or_default().to_lowercase();
        log::debug!("tactics profile: {:?}", profile);
        match profile.as_str() {
            "cautious" => Self::cautious(),
            "aggressive" => Self::aggressive(),
            _ => Self::default(),
        }
    }

    /// Parse and validate a YAML document. Missing fields keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check ordering invariants between related thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.distance;
        ensure_positive("distance.ball_very_close", d.ball_very_close)?;
        ensure_less("distance.ball_very_close", d.ball_very_close, d.ball_close)?;
        ensure_positive("distance.short_pass_range", d.short_pass_range)?;
        ensure_less("distance.short_pass_range", d.short_pass_range, d.long_pass_range)?;
        ensure_positive("distance.optimal_shot_range", d.optimal_shot_range)?;
        if d.optimal_shot_range > d.shot_range {
            return Err(ConfigError::InvalidThreshold {
                name: "distance.optimal_shot_range",
                reason: format!("{} exceeds shot_range {}", d.optimal_shot_range, d.shot_range),
            });
        }
        ensure_positive("distance.pressure_distance", d.pressure_distance)?;
        ensure_positive("distance.lane_threshold", d.lane_threshold)?;
        ensure_positive("distance.dribble_lookahead", d.dribble_lookahead)?;
        ensure_less(
            "distance.dribble_min_clearance",
            d.dribble_min_clearance,
            d.dribble_lookahead,
        )?;

        let a = &self.angle;
        for (name, value) in [
            ("angle.shot_angle_threshold", a.shot_angle_threshold),
            ("angle.pass_axis_angle", a.pass_axis_angle),
            ("angle.dribble_cone_half_angle", a.dribble_cone_half_angle),
        ] {
            if !(value > 0.0 && value < 180.0) {
                return Err(ConfigError::InvalidThreshold {
                    name,
                    reason: format!("{value} is outside (0, 180) degrees"),
                });
            }
        }
        ensure_positive("angle.subtended_angle_norm", a.subtended_angle_norm)?;

        let p = &self.positioning;
        ensure_less(
            "positioning.defensive_line_min_x",
            p.defensive_line_min_x,
            p.mid_block_x,
        )?;

        ensure_positive("utility.pass.score_scale", self.utility.pass.score_scale)?;

        if !(0.0..=1.0).contains(&self.fatigue.tired_threshold) {
            return Err(ConfigError::InvalidThreshold {
                name: "fatigue.tired_threshold",
                reason: format!("{} is outside [0, 1]", self.fatigue.tired_threshold),
            });
        }

        for (name, profile) in self.utility.roles.iter() {
            if profile.commit_threshold < 0.0 || profile.sprint_distance < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    name: "utility.roles",
                    reason: format!("negative threshold in profile {name}"),
                });
            }
            if !(profile.tight_pressure_distance > 0.0
                && profile.tight_pressure_distance < d.pressure_distance)
            {
                return Err(ConfigError::InvalidThreshold {
                    name: "utility.roles.tight_pressure_distance",
                    reason: format!(
                        "{} in profile {name} must lie in (0, pressure_distance)",
                        profile.tight_pressure_distance
                    ),
                });
            }
        }

        Ok(())
    }
}

fn ensure_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold {
            name,
            reason: format!("{value} must be positive"),
        })
    }
}

fn ensure_less(name: &'static str, value: f32, bound: f32) -> Result<(), ConfigError> {
    if value < bound {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold {
            name,
            reason: format!("{value} must be below {bound}"),
        })
    }
}
