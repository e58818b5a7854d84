//! Utility scoring weights
//!
//! Weights for the shoot / pass / dribble contest and the best-pass search.

use serde::{Deserialize, Serialize};

use crate::engine::evaluator::RoleProfiles;

/// Shot quality weights (sum of the first three is 1.0)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotWeights {
    pub distance: f32,
    pub deviation: f32,
    pub subtended_angle: f32,
    /// Flat bonus inside the optimal shot range
    pub close_range_bonus: f32,
}

impl Default for ShotWeights {
    fn default() -> Self {
        Self {
            distance: 0.55,
            deviation: 0.25,
            subtended_angle: 0.20,
            close_range_bonus: 0.4,
        }
    }
}

/// Best-pass scoring terms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PassWeights {
    /// Forward progress weight (dx > 0)
    pub forward_progress: f32,
    /// Backward progress weight (dx < 0)
    pub backward_progress: f32,
    /// Extra backward weight when the passer is in our own half
    pub own_half_backward_extra: f32,
    pub lane_clear: f32,
    pub lane_blocked: f32,
    pub receiver_space: f32,
    pub field_position_base: f32,
    pub field_position_slope: f32,
    /// Bonus for a receiver in the upper short band
    pub short_band_bonus: f32,
    /// Bonus for a long pass that is also strongly forward
    pub long_forward_bonus: f32,
    /// Minimum dx counting as "strongly forward"
    pub long_forward_min_dx: f32,
    /// Penalty beyond the long-pass range
    pub out_of_range_penalty: f32,
    /// Penalty for a receiver with an opponent tight on them
    pub marked_penalty: f32,
    /// Marked when nearest opponent < pressure_distance * this
    pub marked_scale: f32,
    /// Best-pass score is divided by this to get a [0, 1] utility
    pub score_scale: f32,
    /// Pass kind: dx needed for a forward long/high pass
    pub forward_min_dx: f32,
    /// Penalty for a sideways/backward long pass
    pub sideways_long_penalty: f32,
    /// Lateral distance that makes a sideways long pass a switch of play
    pub switch_play_dy: f32,
    pub switch_play_bonus: f32,
}

impl Default for PassWeights {
    fn default() -> Self {
        Self {
            forward_progress: 3.0,
            backward_progress: 5.0,
            own_half_backward_extra: 3.0,
            lane_clear: 1.0,
            lane_blocked: -1.0,
            receiver_space: 1.0,
            field_position_base: 0.5,
            field_position_slope: 0.5,
            short_band_bonus: 0.5,
            long_forward_bonus: 0.3,
            long_forward_min_dx: 0.2,
            out_of_range_penalty: -0.5,
            marked_penalty: -1.0,
            marked_scale: 1.2,
            score_scale: 5.0,
            forward_min_dx: 0.1,
            sideways_long_penalty: 0.3,
            switch_play_dy: 0.3,
            switch_play_bonus: 0.05,
        }
    }
}

/// Dribble utility weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DribbleWeights {
    pub clearance: f32,
    pub free_bonus: f32,
    pub pressure_penalty: f32,
    /// Multiplier applied in our own half
    pub own_half_factor: f32,
}

impl Default for DribbleWeights {
    fn default() -> Self {
        Self {
            clearance: 0.45,
            free_bonus: 0.15,
            pressure_penalty: 0.3,
            own_half_factor: 0.8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UtilityConfig {
    pub shot: ShotWeights,
    pub pass: PassWeights,
    pub dribble: DribbleWeights,
    pub roles: RoleProfiles,
}
