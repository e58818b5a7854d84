//! Line analysis: offside line, gaps in the opponent back line, our own
//! back line cover.

use crate::engine::config::TacticsConfig;
use crate::engine::geometry::distance;
use crate::engine::snapshot::Snapshot;
use crate::engine::types::{PlayerRole, RoleGroup, Vec2};

/// x of the second-deepest active opponent (the offside line)
pub fn offside_line_x(snapshot: &Snapshot) -> Option<f32> {
    let mut xs: Vec<f32> = snapshot.active_opponents().map(|(_, p)| p.position.x).collect();
    if xs.len() < 2 {
        return None;
    }
    xs.sort_by(|a, b| b.total_cmp(a));
    Some(xs[1])
}

/// A position beyond the offside line (minus margin) in the opponent half
pub fn is_offside(snapshot: &Snapshot, position: Vec2, config: &TacticsConfig) -> bool {
    if position.x <= 0.0 {
        return false;
    }
    match offside_line_x(snapshot) {
        Some(line) => position.x > line - config.distance.offside_margin,
        None => false,
    }
}

/// Midpoint of the widest useful gap between opponent backs ahead of the ball
pub fn defensive_gap(snapshot: &Snapshot, agent: usize, ball: Vec2) -> Option<Vec2> {
    let backs: Vec<Vec2> = snapshot
        .active_opponents()
        .filter(|(_, p)| p.role.group() == RoleGroup::Defender)
        .map(|(_, p)| p.position)
        .collect();
    if backs.len() < 2 {
        return None;
    }

    let me = snapshot.teammates[agent].position;
    let mut best: Option<(Vec2, f32)> = None;
    for (i, &a) in backs.iter().enumerate() {
        for &b in &backs[i + 1..] {
            let width = distance(a, b);
            let center = (a + b) * 0.5;
            if width <= 0.15 || center.x <= ball.x {
                continue;
            }
            let mut score = width * 2.0 + (center.x - ball.x);
            if distance(me, center) < 0.2 {
                score += 0.5;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((center, score));
            }
        }
    }
    best.map(|(center, _)| center)
}

/// Centre-backs still behind the mid-block line
pub fn centre_backs_holding(snapshot: &Snapshot, config: &TacticsConfig) -> usize {
    snapshot
        .active_teammates()
        .filter(|(_, p)| {
            p.role == PlayerRole::CentreBack && p.position.x < config.positioning.mid_block_x
        })
        .count()
}

/// The fullback's flank midfielder has pushed past the attack threshold
pub fn flank_needs_support(snapshot: &Snapshot, fullback: PlayerRole, config: &TacticsConfig) -> bool {
    let partner = match fullback {
        PlayerRole::LeftBack => PlayerRole::LeftMid,
        PlayerRole::RightBack => PlayerRole::RightMid,
        _ => return false,
    };
    snapshot.active_teammates().any(|(_, p)| {
        p.role == partner && p.position.x > config.positioning.attack_x_threshold
    })
}
