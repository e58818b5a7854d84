//! Role-conditioned target positions

use crate::engine::config::TacticsConfig;
use crate::engine::constants::goal;
use crate::engine::geometry::{clamp_to_pitch, distance};
use crate::engine::snapshot::Snapshot;
use crate::engine::types::{PlayerRole, RoleGroup, Vec2};

/// Keeper spot on the line between the goal centre and the ball
pub fn keeper_position(ball: Vec2, config: &TacticsConfig) -> Vec2 {
    let p = &config.positioning;
    let to_ball = ball - goal::OWN_CENTER;
    let Some(dir) = to_ball.try_normalized() else {
        return Vec2::new(goal::OWN_X + p.keeper_min_line_offset, 0.0);
    };
    let step = p.keeper_max_advance.min(to_ball.length() * 0.3);
    let mut spot = goal::OWN_CENTER + dir * step;
    spot.x = spot.x.max(goal::OWN_X + p.keeper_min_line_offset);
    spot
}

/// Keeper spot while we have the ball
pub fn keeper_offensive_position(ball: Vec2) -> Vec2 {
    let advance = if ball.x > 0.0 { 0.05 } else { 0.03 };
    Vec2::new(goal::OWN_X + advance, 0.0)
}

/// x the back line holds for a given ball position
pub fn back_line_x(ball: Vec2, config: &TacticsConfig) -> f32 {
    let p = &config.positioning;
    (ball.x - p.defensive_line_ball_gap)
        .min(p.mid_block_x)
        .max(p.defensive_line_min_x)
}

/// Lateral offset for the k-th of n centre-backs
fn centre_back_offset(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> f32 {
    let cbs: Vec<usize> = snapshot
        .active_teammates()
        .filter(|(_, p)| p.role == PlayerRole::CentreBack)
        .map(|(i, _)| i)
        .collect();
    let Some(rank) = cbs.iter().position(|&i| i == agent) else {
        return 0.0;
    };
    let centre = (cbs.len() as f32 - 1.0) / 2.0;
    (rank as f32 - centre) * config.positioning.centre_back_spread
}

/// Where an agent should stand when the opponent has the ball
pub fn defensive_target_position(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Vec2 {
    let ball = snapshot.ball.position;
    let p = &config.positioning;
    let role = snapshot.teammates[agent].role;

    let target = match role {
        PlayerRole::Goalkeeper => keeper_position(ball, config),
        PlayerRole::LeftBack | PlayerRole::RightBack => Vec2::new(
            back_line_x(ball, config),
            role.flank_sign() * p.defensive_line_y_spread / 2.0,
        ),
        PlayerRole::CentreBack => Vec2::new(
            back_line_x(ball, config),
            ball.y * 0.3 + centre_back_offset(snapshot, agent, config),
        ),
        PlayerRole::DefenceMid => Vec2::new(
            (ball.x - p.midfield_ball_gap)
                .min(back_line_x(ball, config) + p.midfield_line_offset)
                .max(back_line_x(ball, config) + p.midfield_line_offset * 0.5),
            ball.y * 0.5,
        ),
        PlayerRole::LeftMid | PlayerRole::RightMid => Vec2::new(
            (ball.x - p.midfield_ball_gap).max(p.mid_block_x),
            role.flank_sign() * p.wide_mid_defensive_y,
        ),
        PlayerRole::CentralMid | PlayerRole::AttackMid => Vec2::new(
            (ball.x - p.midfield_ball_gap).max(p.mid_block_x),
            ball.y * 0.5,
        ),
        PlayerRole::CentralForward => Vec2::new((ball.x - 0.1).max(-0.1), ball.y * 0.3),
    };
    clamp_to_pitch(target)
}

/// Closest active teammate of `group` to `point`, first index on ties
pub fn closest_in_group(snapshot: &Snapshot, group: RoleGroup, point: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in snapshot.active_teammates() {
        if p.role.group() != group {
            continue;
        }
        let d = distance(p.position, point);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Whether the agent is its group's closest player to `point`
pub fn is_closest_in_group(snapshot: &Snapshot, agent: usize, point: Vec2) -> bool {
    let group = snapshot.teammates[agent].role.group();
    closest_in_group(snapshot, group, point) == Some(agent)
}

/// Support spot for a midfielder when the ball is loose
pub fn contention_support_position(role: PlayerRole, ball: Vec2, config: &TacticsConfig) -> Vec2 {
    let target = match role {
        PlayerRole::AttackMid => Vec2::new(ball.x + 0.05, ball.y),
        PlayerRole::LeftMid | PlayerRole::RightMid => {
            Vec2::new(ball.x, role.flank_sign() * config.positioning.wide_mid_defensive_y)
        }
        _ => Vec2::new(ball.x - 0.05, ball.y),
    };
    clamp_to_pitch(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scenario_builder::ScenarioBuilder;

    #[test]
    fn test_keeper_steps_toward_ball() {
        let cfg = TacticsConfig::default();
        let spot = keeper_position(Vec2::new(-0.5, 0.0), &cfg);
        assert!((spot.x - (-0.95)).abs() < 1e-6);
        assert_eq!(spot.y, 0.0);

        // Ball very close: step shrinks
        let near = keeper_position(Vec2::new(-0.9, 0.0), &cfg);
        assert!((near.x - (-0.97)).abs() < 1e-5);

        // Ball on the goal centre: default spot
        let on_goal = keeper_position(goal::OWN_CENTER, &cfg);
        assert!((on_goal.x - (-0.98)).abs() < 1e-6);
        assert_eq!(on_goal.y, 0.0);
    }

    #[test]
    fn test_keeper_never_behind_line_offset() {
        let cfg = TacticsConfig::default();
        let spot = keeper_position(Vec2::new(-0.99, 0.3), &cfg);
        assert!(spot.x >= -0.98 - 1e-6);
    }

    #[test]
    fn test_back_line_clamped() {
        let cfg = TacticsConfig::default();
        assert_eq!(back_line_x(Vec2::new(0.5, 0.0), &cfg), -0.2);
        assert_eq!(back_line_x(Vec2::new(-0.98, 0.0), &cfg), -0.85);
        assert!((back_line_x(Vec2::new(-0.5, 0.0), &cfg) - (-0.6)).abs() < 1e-6);
    }

    #[test]
    fn test_defensive_targets_by_role() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::new().ball_owned_by_them(9).ball_at(Vec2::new(-0.3, 0.1)).build();
        for (i, player) in snap.teammates.iter().enumerate() {
            let t = defensive_target_position(&snap, i, &cfg);
            match player.role {
                PlayerRole::LeftBack => assert!((t.y - (-0.15)).abs() < 1e-6),
                PlayerRole::RightBack => assert!((t.y - 0.15).abs() < 1e-6),
                PlayerRole::LeftMid => assert_eq!(t.y, -0.2),
                PlayerRole::Goalkeeper => assert!(t.x < -0.9),
                _ => {}
            }
            // Defenders stay goal-side of the ball
            if player.role.group() == RoleGroup::Defender {
                assert!(t.x < snap.ball.position.x);
            }
        }
    }

    #[test]
    fn test_centre_backs_split() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::new().ball_owned_by_them(9).ball_at(Vec2::new(-0.3, 0.0)).build();
        let cbs: Vec<usize> = snap
            .active_teammates()
            .filter(|(_, p)| p.role == PlayerRole::CentreBack)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(cbs.len(), 2);
        let a = defensive_target_position(&snap, cbs[0], &cfg);
        let b = defensive_target_position(&snap, cbs[1], &cfg);
        assert!((a.y + b.y).abs() < 1e-6);
        assert!((b.y - a.y - cfg.positioning.centre_back_spread).abs() < 1e-6);
    }

    #[test]
    fn test_closest_in_group() {
        let snap = ScenarioBuilder::empty()
            .teammate(1, PlayerRole::CentreBack, Vec2::new(-0.5, 0.0))
            .teammate(2, PlayerRole::LeftBack, Vec2::new(-0.4, -0.2))
            .teammate(5, PlayerRole::CentralMid, Vec2::new(-0.3, 0.0))
            .build();
        let ball = Vec2::new(-0.35, -0.2);
        assert_eq!(closest_in_group(&snap, RoleGroup::Defender, ball), Some(2));
        assert!(is_closest_in_group(&snap, 5, ball));
        assert!(!is_closest_in_group(&snap, 1, ball));
        assert_eq!(closest_in_group(&snap, RoleGroup::Forward, ball), None);
    }
}
