//! Shot geometry

use crate::engine::config::TacticsConfig;
use crate::engine::constants::goal;
use crate::engine::geometry::{angle_between_deg, count_in_corridor, distance};
use crate::engine::snapshot::Snapshot;
use crate::engine::types::Vec2;

/// Whether a shot from the ball is worth considering.
///
/// The carrier must be in the attacking half; distance and deviation from
/// the attacking axis are measured from the ball.
pub fn shot_feasibility(agent_pos: Vec2, ball_pos: Vec2, config: &TacticsConfig) -> bool {
    if agent_pos.x <= 0.0 {
        return false;
    }
    let to_goal = goal::OPPONENT_CENTER - ball_pos;
    if to_goal.length() > config.distance.shot_range {
        return false;
    }
    match angle_between_deg(to_goal, Vec2::FORWARD) {
        Some(deviation) => deviation <= config.angle.shot_angle_threshold,
        None => false,
    }
}

/// Angle in degrees subtended at `from` by the two posts of the goal at `goal_center`
pub fn shot_angle(from: Vec2, goal_center: Vec2) -> f32 {
    let top = Vec2::new(goal_center.x, goal_center.y + goal::TOP_POST_Y);
    let bottom = Vec2::new(goal_center.x, goal_center.y + goal::BOTTOM_POST_Y);
    angle_between_deg(top - from, bottom - from).unwrap_or(0.0)
}

/// Outfield opponents inside the corridor between `from` and the goal centre
pub fn shot_blockers(snapshot: &Snapshot, from: Vec2, config: &TacticsConfig) -> usize {
    count_in_corridor(
        from,
        goal::OPPONENT_CENTER,
        &snapshot.opponent_outfield_positions(),
        config.distance.shot_corridor,
    )
}

/// Distance from a point to the attacked goal centre
pub fn distance_to_goal(from: Vec2) -> f32 {
    distance(from, goal::OPPONENT_CENTER)
}
