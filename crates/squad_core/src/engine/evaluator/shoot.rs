//! Shoot utility

use crate::engine::config::TacticsConfig;
use crate::engine::constants::goal;
use crate::engine::geometry::{angle_between_deg, distance};
use crate::engine::snapshot::Snapshot;
use crate::engine::spatial::shooting::{shot_angle, shot_blockers, shot_feasibility};
use crate::engine::types::Vec2;

/// Quality of a shot from the ball position, before blockers and role scaling
pub fn shot_quality(ball: Vec2, config: &TacticsConfig) -> f32 {
    let d_cfg = &config.distance;
    let w = &config.utility.shot;
    let d = distance(ball, goal::OPPONENT_CENTER);

    let distance_score = if d <= d_cfg.optimal_shot_range {
        1.0
    } else {
        let span = (d_cfg.shot_range - d_cfg.optimal_shot_range).max(f32::EPSILON);
        let t = ((d - d_cfg.optimal_shot_range) / span).clamp(0.0, 1.0);
        1.0 - t * t
    };

    let deviation = angle_between_deg(goal::OPPONENT_CENTER - ball, Vec2::FORWARD).unwrap_or(0.0);
    let deviation_score = (1.0 - deviation / config.angle.shot_angle_threshold).clamp(0.0, 1.0);

    let angle_score =
        (shot_angle(ball, goal::OPPONENT_CENTER) / config.angle.subtended_angle_norm).min(1.0);

    let mut quality =
        w.distance * distance_score + w.deviation * deviation_score + w.subtended_angle * angle_score;
    if d <= d_cfg.optimal_shot_range {
        quality += w.close_range_bonus;
    }
    quality
}

/// Shoot utility for the ball-owning agent (0 when not feasible)
pub fn shoot_utility(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> f32 {
    let me = &snapshot.teammates[agent];
    let ball = snapshot.ball.position;
    if !shot_feasibility(me.position, ball, config) {
        return 0.0;
    }
    let blockers = shot_blockers(snapshot, ball, config);
    let multiplier = config.utility.roles.get(me.role).shot_multiplier;
    shot_quality(ball, config) / (1.0 + blockers as f32) * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scenario_builder::ScenarioBuilder;
    use crate::engine::types::PlayerRole;

    fn striker_at(pos: Vec2) -> ScenarioBuilder {
        ScenarioBuilder::empty()
            .teammate(10, PlayerRole::CentralForward, pos)
            .ball_owned_by_us(10)
    }

    #[test]
    fn test_quality_peaks_inside_optimal_range() {
        let cfg = TacticsConfig::default();
        let close = shot_quality(Vec2::new(0.9, 0.0), &cfg);
        let edge = shot_quality(Vec2::new(0.75, 0.0), &cfg);
        let far = shot_quality(Vec2::new(0.72, 0.0), &cfg);
        assert!(close > 1.0);
        assert!(close > edge);
        assert!(edge > far);
    }

    #[test]
    fn test_blockers_divide_utility() {
        let cfg = TacticsConfig::default();
        let open = striker_at(Vec2::new(0.8, 0.0)).build();
        let blocked = striker_at(Vec2::new(0.8, 0.0))
            .opponent(4, PlayerRole::CentreBack, Vec2::new(0.9, 0.01))
            .build();
        let u_open = shoot_utility(&open, 10, &cfg);
        let u_blocked = shoot_utility(&blocked, 10, &cfg);
        assert!((u_open / 2.0 - u_blocked).abs() < 1e-5);
    }

    #[test]
    fn test_role_multiplier() {
        let cfg = TacticsConfig::default();
        let fwd = striker_at(Vec2::new(0.85, 0.0)).build();
        let keeper = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::Goalkeeper, Vec2::new(0.85, 0.0))
            .ball_owned_by_us(0)
            .build();
        let back = ScenarioBuilder::empty()
            .teammate(1, PlayerRole::CentreBack, Vec2::new(0.85, 0.0))
            .ball_owned_by_us(1)
            .build();
        let u_fwd = shoot_utility(&fwd, 10, &cfg);
        assert!(u_fwd > shoot_utility(&back, 1, &cfg));
        assert_eq!(shoot_utility(&keeper, 0, &cfg), 0.0);
    }

    #[test]
    fn test_infeasible_is_zero() {
        let cfg = TacticsConfig::default();
        let snap = striker_at(Vec2::new(0.3, 0.0)).build();
        assert_eq!(shoot_utility(&snap, 10, &cfg), 0.0);
    }
}
