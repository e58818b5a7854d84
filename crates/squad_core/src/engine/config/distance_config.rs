//! Distance thresholds
//!
//! All values are in normalized pitch units (the pitch is 2.0 long).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Agent is considered close to the ball
    pub ball_close: f32,
    /// Agent is close enough to tackle
    pub ball_very_close: f32,
    /// Opponent proximity considered "close"
    pub opponent_close: f32,

    /// Upper bound of the short-pass band
    pub short_pass_range: f32,
    /// Effective long-pass range
    pub long_pass_range: f32,

    /// Maximum shooting distance to the goal centre
    pub shot_range: f32,
    /// Distance inside which shots get full distance credit
    pub optimal_shot_range: f32,

    /// Opponent closer than this actively contests the ball
    pub pressure_distance: f32,

    /// Default passing-lane occlusion threshold
    pub lane_threshold: f32,
    /// Stricter lane threshold for defensive clearances
    pub defensive_lane_threshold: f32,
    /// Corridor half-width around the ball-goal segment
    pub shot_corridor: f32,

    /// Own-goal guard buffer added to the passer's goal distance
    pub own_goal_margin: f32,
    /// Margin subtracted from the offside line
    pub offside_margin: f32,
    /// Receiver space is clipped at this distance before normalizing
    pub receiver_space_cap: f32,

    /// Forward cone lookahead for dribble space
    pub dribble_lookahead: f32,
    /// Minimum cone clearance for a safe dribble
    pub dribble_min_clearance: f32,

    /// Sprinting agents this close to their target release sprint
    pub release_sprint_distance: f32,
    /// Keeper rushes when the opponent-owned ball is this close to our goal
    pub keeper_rush_distance: f32,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            ball_close: 0.03,
            ball_very_close: 0.015,
            opponent_close: 0.04,
            short_pass_range: 0.2,
            long_pass_range: 0.6,
            shot_range: 0.3,
            optimal_shot_range: 0.15,
            pressure_distance: 0.05,
            lane_threshold: 0.05,
            defensive_lane_threshold: 0.04,
            shot_corridor: 0.03,
            own_goal_margin: 0.02,
            offside_margin: 0.02,
            receiver_space_cap: 0.15,
            dribble_lookahead: 0.12,
            dribble_min_clearance: 0.04,
            release_sprint_distance: 0.03,
            // Penalty area depth plus a little slack
            keeper_rush_distance: 0.17,
        }
    }
}
