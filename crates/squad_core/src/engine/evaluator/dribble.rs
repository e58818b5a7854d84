//! Dribble utility and carry targets

use crate::engine::config::TacticsConfig;
use crate::engine::constants::goal;
use crate::engine::geometry::in_opponent_half;
use crate::engine::snapshot::Snapshot;
use crate::engine::spatial::space::{avoid_opponents, check_dribble_space};
use crate::engine::types::{PlayerRole, Vec2};

/// Where the ball carrier wants to take the ball, by role
pub fn carry_target(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Vec2 {
    let me = &snapshot.teammates[agent];
    let pos = me.position;
    match me.role {
        PlayerRole::Goalkeeper => Vec2::new((pos.x + 0.05).min(-0.9), pos.y),
        PlayerRole::CentreBack => Vec2::new((pos.x + 0.1).min(config.positioning.mid_block_x), pos.y),
        PlayerRole::LeftBack => Vec2::new((pos.x + 0.15).min(0.0), pos.y.min(-0.2)),
        PlayerRole::RightBack => Vec2::new((pos.x + 0.15).min(0.0), pos.y.max(0.2)),
        PlayerRole::CentralForward => goal::OPPONENT_CENTER,
        _ if in_opponent_half(pos) => Vec2::new((pos.x + 0.1).min(0.8), pos.y),
        PlayerRole::LeftMid => Vec2::new((pos.x + 0.08).min(0.0), pos.y.min(-0.15)),
        PlayerRole::RightMid => Vec2::new((pos.x + 0.08).min(0.0), pos.y.max(0.15)),
        _ => Vec2::new((pos.x + 0.08).min(0.0), pos.y),
    }
}

/// Carry direction after steering around the nearest obstruction
pub fn dribble_direction(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Vec2 {
    let desired = carry_target(snapshot, agent, config) - snapshot.teammates[agent].position;
    avoid_opponents(snapshot, agent, desired, config)
}

/// Dribble utility for the ball-owning agent (0 when the cone is closed)
pub fn dribble_utility(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> f32 {
    let me = &snapshot.teammates[agent];
    let direction = dribble_direction(snapshot, agent, config);
    let (has_space, clearance) = check_dribble_space(snapshot, agent, direction, config);
    if !has_space {
        return 0.0;
    }

    let w = &config.utility.dribble;
    let mut utility = w.clearance * clearance / config.distance.dribble_lookahead;
    if snapshot.nearest_opponent_distance(me.position) < config.distance.pressure_distance {
        utility -= w.pressure_penalty;
    } else {
        utility += w.free_bonus;
    }
    utility += config.utility.roles.get(me.role).dribble_bias;
    if !in_opponent_half(me.position) {
        utility *= w.own_half_factor;
    }
    utility.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scenario_builder::ScenarioBuilder;

    fn carrier(role: PlayerRole, pos: Vec2) -> ScenarioBuilder {
        ScenarioBuilder::empty().teammate(0, role, pos).ball_owned_by_us(0)
    }

    #[test]
    fn test_carry_targets_by_role() {
        let cfg = TacticsConfig::default();
        let t = |role, pos| carry_target(&carrier(role, pos).build(), 0, &cfg);

        assert_eq!(t(PlayerRole::CentreBack, Vec2::new(-0.25, 0.0)).x, -0.2);
        let lb = t(PlayerRole::LeftBack, Vec2::new(-0.5, -0.1));
        assert!((lb.x - (-0.35)).abs() < 1e-6);
        assert_eq!(lb.y, -0.2);
        assert_eq!(t(PlayerRole::RightMid, Vec2::new(-0.3, 0.05)).y, 0.15);
        assert_eq!(t(PlayerRole::CentralMid, Vec2::new(0.75, 0.0)).x, 0.8);
        assert_eq!(t(PlayerRole::Goalkeeper, Vec2::new(-0.92, 0.0)).x, -0.9);
    }

    #[test]
    fn test_open_field_attacker_outscores_centre_back() {
        let cfg = TacticsConfig::default();
        let am = dribble_utility(&carrier(PlayerRole::AttackMid, Vec2::new(0.2, 0.0)).build(), 0, &cfg);
        let cb = dribble_utility(&carrier(PlayerRole::CentreBack, Vec2::new(-0.5, 0.0)).build(), 0, &cfg);
        // 0.45 + 0.15 + 0.15, no own-half factor
        assert!((am - 0.75).abs() < 1e-5);
        assert!(cb < am);
    }

    #[test]
    fn test_blocked_cone_is_zero() {
        let cfg = TacticsConfig::default();
        // Opponents both straight ahead and on the avoid sides
        let snap = carrier(PlayerRole::CentralForward, Vec2::new(0.5, 0.0))
            .opponent(1, PlayerRole::CentreBack, Vec2::new(0.52, 0.0))
            .opponent(2, PlayerRole::CentreBack, Vec2::new(0.5, 0.03))
            .opponent(3, PlayerRole::CentreBack, Vec2::new(0.5, -0.03))
            .build();
        assert_eq!(dribble_utility(&snap, 0, &cfg), 0.0);
    }

    #[test]
    fn test_centre_back_at_mid_block_has_nowhere_to_go() {
        let cfg = TacticsConfig::default();
        let snap = carrier(PlayerRole::CentreBack, Vec2::new(-0.2, 0.0)).build();
        assert_eq!(dribble_utility(&snap, 0, &cfg), 0.0);
    }
}
