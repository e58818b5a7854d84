//! Open-space analysis around the ball carrier

use crate::engine::config::TacticsConfig;
use crate::engine::geometry::angle_between_deg;
use crate::engine::snapshot::Snapshot;
use crate::engine::types::Vec2;

/// Probe offsets for a midfielder or back escaping pressure
pub const ESCAPE_PROBES_WIDE: [Vec2; 8] = [
    Vec2::new(0.05, 0.0),
    Vec2::new(0.0, 0.05),
    Vec2::new(0.0, -0.05),
    Vec2::new(-0.05, 0.0),
    Vec2::new(0.04, 0.04),
    Vec2::new(0.04, -0.04),
    Vec2::new(-0.04, 0.04),
    Vec2::new(-0.04, -0.04),
];

/// Tighter probe offsets for a forward shielding the ball
pub const ESCAPE_PROBES_TIGHT: [Vec2; 8] = [
    Vec2::new(0.03, 0.0),
    Vec2::new(0.0, 0.03),
    Vec2::new(0.0, -0.03),
    Vec2::new(-0.03, 0.0),
    Vec2::new(0.02, 0.02),
    Vec2::new(0.02, -0.02),
    Vec2::new(-0.02, 0.02),
    Vec2::new(-0.02, -0.02),
];

/// Forward cone check.
///
/// Returns whether the cone of `direction` (half angle from config, fixed
/// lookahead) keeps opponents beyond the minimum safety distance, and the
/// clearance to the nearest opponent inside it (the lookahead when empty).
pub fn check_dribble_space(
    snapshot: &Snapshot,
    agent: usize,
    direction: Vec2,
    config: &TacticsConfig,
) -> (bool, f32) {
    let Some(dir) = direction.try_normalized() else {
        return (false, 0.0);
    };
    let origin = snapshot.teammates[agent].position;
    let lookahead = config.distance.dribble_lookahead;
    let half_angle = config.angle.dribble_cone_half_angle;

    let clearance = snapshot
        .active_opponents()
        .filter_map(|(_, opp)| {
            let to_opp = opp.position - origin;
            let d = to_opp.length();
            if d > lookahead {
                return None;
            }
            // An opponent on top of the carrier is always inside the cone
            match angle_between_deg(dir, to_opp) {
                Some(angle) if angle > half_angle => None,
                _ => Some(d),
            }
        })
        .fold(lookahead, f32::min);

    (clearance > config.distance.dribble_min_clearance, clearance)
}

/// Offset from `probes` whose landing point is farthest from every opponent.
///
/// Returns the offset and that clearance; `None` only for an empty probe set.
pub fn best_escape_offset(snapshot: &Snapshot, agent: usize, probes: &[Vec2]) -> Option<(Vec2, f32)> {
    let origin = snapshot.teammates[agent].position;
    let mut best: Option<(Vec2, f32)> = None;
    for &offset in probes {
        let space = snapshot.nearest_opponent_distance(origin + offset);
        if best.map_or(true, |(_, s)| space > s) {
            best = Some((offset, space));
        }
    }
    best
}

/// Steer a dribble around an opponent standing in the desired direction.
///
/// Keeps `desired` when the point 0.05 ahead is clear, otherwise turns 90°
/// toward whichever side has more room.
pub fn avoid_opponents(snapshot: &Snapshot, agent: usize, desired: Vec2, config: &TacticsConfig) -> Vec2 {
    let Some(dir) = desired.try_normalized() else {
        return desired;
    };
    const PROBE: f32 = 0.05;
    let origin = snapshot.teammates[agent].position;

    if snapshot.nearest_opponent_distance(origin + dir * PROBE) > config.distance.opponent_close {
        return dir;
    }

    let left = dir.perp_left();
    let right = dir.perp_right();
    let left_space = snapshot.nearest_opponent_distance(origin + left * PROBE);
    let right_space = snapshot.nearest_opponent_distance(origin + right * PROBE);
    if left_space > right_space {
        left
    } else {
        right
    }
}

/// Three or more opponents packed just ahead of the ball
pub fn too_crowded_ahead(snapshot: &Snapshot, ball: Vec2) -> bool {
    snapshot
        .active_opponents()
        .filter(|(_, opp)| {
            let p = opp.position;
            p.x > ball.x && p.x < ball.x + 0.15 && (p.y - ball.y).abs() < 0.2
        })
        .count()
        >= 3
}

/// Lateral lane in the attacking third least occupied by our own players
pub fn least_crowded_lane_y(snapshot: &Snapshot) -> f32 {
    const LANES: [f32; 5] = [-0.2, -0.1, 0.0, 0.1, 0.2];
    let occupied: Vec<f32> = snapshot
        .active_teammates()
        .filter(|(_, p)| p.position.x > -0.1)
        .map(|(_, p)| p.position.y)
        .collect();

    let mut best_y = 0.0;
    let mut max_space = -1.0;
    for y in LANES {
        let space = occupied
            .iter()
            .map(|oy| (y - oy).abs())
            .reduce(f32::min)
            .unwrap_or(1.0);
        if space > max_space {
            max_space = space;
            best_y = y;
        }
    }
    best_y
}
