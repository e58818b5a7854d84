//! Shape and positioning parameters (angles, lines, fatigue)

use serde::{Deserialize, Serialize};

/// Angular thresholds, in degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleConfig {
    /// Max deviation of the goal direction from the attacking axis for a shot
    pub shot_angle_threshold: f32,
    /// Max deviation from the x-axis for a pass to count as axis-aligned
    pub pass_axis_angle: f32,
    /// Half angle of the forward dribble cone
    pub dribble_cone_half_angle: f32,
    /// Subtended goal angle that earns full shot-quality credit
    pub subtended_angle_norm: f32,
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            shot_angle_threshold: 30.0,
            pass_axis_angle: 30.0,
            dribble_cone_half_angle: 30.0,
            subtended_angle_norm: 60.0,
        }
    }
}

/// Team shape parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PositioningConfig {
    /// Highest x the back line holds (mid-block)
    pub mid_block_x: f32,
    /// Lowest x the back line drops to
    pub defensive_line_min_x: f32,
    /// Back line sits this far behind the ball
    pub defensive_line_ball_gap: f32,
    /// Lateral spread of the back line (fullbacks at +-spread/2)
    pub defensive_line_y_spread: f32,
    /// Lateral spacing between centre-backs when more than one is active
    pub centre_back_spread: f32,
    /// Midfield line sits this far ahead of the back line
    pub midfield_line_offset: f32,
    /// Midfield line never passes ball.x minus this gap
    pub midfield_ball_gap: f32,
    /// Lateral slot of wide midfielders when defending
    pub wide_mid_defensive_y: f32,
    /// Lateral channel used by wide runners in attack
    pub wide_channel_y: f32,
    /// x beyond which the attack is considered advanced
    pub attack_x_threshold: f32,
    /// Furthest the keeper steps off the goal centre along the ball line
    pub keeper_max_advance: f32,
    /// Keeper never stands closer than this to the goal line
    pub keeper_min_line_offset: f32,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            mid_block_x: -0.2,
            defensive_line_min_x: -0.85,
            defensive_line_ball_gap: 0.1,
            defensive_line_y_spread: 0.3,
            centre_back_spread: 0.12,
            midfield_line_offset: 0.15,
            midfield_ball_gap: 0.05,
            wide_mid_defensive_y: 0.2,
            wide_channel_y: 0.25,
            attack_x_threshold: 0.2,
            keeper_max_advance: 0.05,
            keeper_min_line_offset: 0.02,
        }
    }
}

/// Fatigue handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueConfig {
    /// Fatigue above this disables sprint overrides
    pub tired_threshold: f32,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self { tired_threshold: 0.5 }
    }
}
