//! Forward handler (CF)
//!
//! Off the ball the forward looks for a receiving spot ahead of the carrier,
//! falls back to the widest gap between opponent backs, and stretches the
//! pitch for a counter when the ball is still in our half.

use crate::engine::constants::goal;
use crate::engine::evaluator::{Decision, DecisionPath};
use crate::engine::geometry::{angle_between_deg, clamp_to_pitch, distance, in_opponent_half, is_path_clear};
use crate::engine::spatial::lines::{defensive_gap, is_offside};
use crate::engine::spatial::positioning::is_closest_in_group;
use crate::engine::spatial::shooting::distance_to_goal;
use crate::engine::spatial::space::{least_crowded_lane_y, too_crowded_ahead};
use crate::engine::types::Vec2;

use super::{chase_ball, press_ball, within_press_range, RoleBehavior, RoleContext};

/// Handler for the centre-forward
pub struct ForwardHandler;

impl RoleBehavior for ForwardHandler {
    fn name(&self) -> &'static str {
        "forward"
    }

    fn support(&self, ctx: &RoleContext) -> Decision {
        let target = if in_opponent_half(ctx.ball()) {
            attacking_run_target(ctx)
        } else {
            counter_run_target(ctx)
        };
        ctx.run_to(target, DecisionPath::Support)
    }

    fn defend(&self, ctx: &RoleContext) -> Decision {
        if is_closest_in_group(ctx.snapshot, ctx.agent, ctx.ball()) && within_press_range(ctx) {
            return press_ball(ctx);
        }
        let ball = ctx.ball();
        let target = Vec2::new((ball.x - 0.1).max(-0.1), ball.y * 0.3);
        ctx.run_to(target, DecisionPath::Defend)
    }

    fn contest(&self, ctx: &RoleContext) -> Decision {
        let ball = ctx.ball();
        if in_opponent_half(ball) && is_closest_in_group(ctx.snapshot, ctx.agent, ball) {
            return chase_ball(ctx);
        }
        let target = Vec2::new(ball.x.max(0.05), ball.y * 0.5);
        ctx.run_to(clamp_to_pitch(target), DecisionPath::Contest)
    }
}

// ============================================================================
// Runs
// ============================================================================

/// Run target with the ball in the opponent half
pub fn attacking_run_target(ctx: &RoleContext) -> Vec2 {
    let snapshot = ctx.snapshot;
    let ball = ctx.ball();

    let carrier = snapshot.our_ball_owner().filter(|&c| c != ctx.agent);
    if let Some(spot) = carrier.and_then(|c| receiving_position(ctx, snapshot.teammates[c].position)) {
        return spot;
    }

    defensive_gap(snapshot, ctx.agent, ball).unwrap_or_else(|| {
        Vec2::new(
            (ball.x + 0.08).min(goal::OPPONENT_X - 0.12),
            least_crowded_lane_y(snapshot),
        )
    })
}

/// Stay high and pull away from the ball's side
pub fn counter_run_target(ctx: &RoleContext) -> Vec2 {
    let ball = ctx.ball();
    let y = if ball.y > 0.1 {
        -0.1
    } else if ball.y < -0.1 {
        0.1
    } else {
        0.0
    };
    Vec2::new(ctx.position().x.max(0.1), y)
}

/// Best spot to receive from the carrier.
///
/// Candidates: runs in behind, half-space channels, and short drop-offs when
/// the area ahead of the ball is crowded. Spots off the pitch or well behind
/// the carrier are skipped.
pub fn receiving_position(ctx: &RoleContext, carrier: Vec2) -> Option<Vec2> {
    let ball = ctx.ball();
    let mut candidates = Vec::with_capacity(19);

    for dx in [0.1, 0.12, 0.15] {
        for dy in [-0.05, 0.0, 0.05] {
            candidates.push(Vec2::new(ball.x + dx, ball.y + dy));
        }
    }
    for dy in [-0.1, -0.15, 0.1, 0.15] {
        candidates.push(Vec2::new(ball.x + 0.08, ball.y + dy));
    }
    if too_crowded_ahead(ctx.snapshot, ball) {
        for dx in [-0.02, -0.05] {
            for dy in [-0.08, 0.0, 0.08] {
                candidates.push(Vec2::new(carrier.x + dx, carrier.y + dy));
            }
        }
    }

    let mut best: Option<(Vec2, f32)> = None;
    for spot in candidates {
        if clamp_to_pitch(spot) != spot || spot.x < carrier.x - 0.05 {
            continue;
        }
        let score = receiving_score(ctx, spot, carrier);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((spot, score));
        }
    }
    best.map(|(spot, _)| spot)
}

fn receiving_score(ctx: &RoleContext, spot: Vec2, carrier: Vec2) -> f32 {
    let snapshot = ctx.snapshot;
    let mut score = (1.5 - distance_to_goal(spot)) * 3.0;

    score += snapshot.nearest_opponent_distance(spot).min(1.0) * 4.0;

    let opponents = snapshot.opponent_positions();
    score += if is_path_clear(carrier, spot, &opponents, ctx.config.distance.lane_threshold) {
        2.0
    } else {
        -1.0
    };

    let run = distance(ctx.position(), spot);
    if run > 0.2 {
        score -= 1.0;
    } else if run < 0.05 {
        score -= 0.5;
    }

    if spot.x > carrier.x + 0.05 {
        score += 1.5;
    }
    if is_offside(snapshot, spot, ctx.config) {
        score -= 3.0;
    }
    if angle_between_deg(goal::OPPONENT_CENTER - spot, Vec2::FORWARD).is_some_and(|a| a < 45.0) {
        score += 1.0;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::action::Action;
    use crate::engine::config::TacticsConfig;
    use crate::engine::scenario_builder::ScenarioBuilder;
    use crate::engine::types::PlayerRole;

    fn striker(at: Vec2) -> ScenarioBuilder {
        ScenarioBuilder::empty().teammate(10, PlayerRole::CentralForward, at)
    }

    #[test]
    fn test_counter_run_pulls_away_from_ball_side() {
        let cfg = TacticsConfig::default();
        let snap = striker(Vec2::new(-0.05, 0.0))
            .teammate(6, PlayerRole::CentralMid, Vec2::new(-0.4, 0.2))
            .ball_owned_by_us(6)
            .build();
        let ctx = RoleContext::new(&snap, 10, &cfg);
        assert_eq!(counter_run_target(&ctx), Vec2::new(0.1, -0.1));
        assert_eq!(ForwardHandler.support(&ctx).path, DecisionPath::Support);
    }

    #[test]
    fn test_receiving_spot_ahead_and_onside() {
        let cfg = TacticsConfig::default();
        let snap = striker(Vec2::new(0.45, 0.1))
            .teammate(9, PlayerRole::AttackMid, Vec2::new(0.4, 0.0))
            .opponent(0, PlayerRole::Goalkeeper, Vec2::new(0.98, 0.0))
            .opponent(1, PlayerRole::CentreBack, Vec2::new(0.7, -0.1))
            .opponent(2, PlayerRole::CentreBack, Vec2::new(0.7, 0.1))
            .ball_owned_by_us(9)
            .build();
        let ctx = RoleContext::new(&snap, 10, &cfg);
        let spot = receiving_position(&ctx, Vec2::new(0.4, 0.0)).unwrap();
        assert!(spot.x > 0.4);
        assert!(!is_offside(&snap, spot, &cfg));
        assert_eq!(attacking_run_target(&ctx), spot);
    }

    #[test]
    fn test_receiving_spots_stay_on_pitch() {
        let cfg = TacticsConfig::default();
        let snap = striker(Vec2::new(0.9, 0.3))
            .teammate(8, PlayerRole::RightMid, Vec2::new(0.95, 0.4))
            .ball_owned_by_us(8)
            .build();
        let ctx = RoleContext::new(&snap, 10, &cfg);
        if let Some(spot) = receiving_position(&ctx, Vec2::new(0.95, 0.4)) {
            assert_eq!(clamp_to_pitch(spot), spot);
        }
    }

    #[test]
    fn test_press_only_when_close() {
        let cfg = TacticsConfig::default();
        let near = striker(Vec2::new(0.3, 0.0))
            .opponent(4, PlayerRole::CentreBack, Vec2::new(0.34, 0.0))
            .ball_owned_by_them(4)
            .build();
        let d = ForwardHandler.defend(&RoleContext::new(&near, 10, &cfg));
        assert_eq!(d.path, DecisionPath::Press);
        assert_eq!(d.action, Action::Right);

        let far = striker(Vec2::new(0.3, 0.0))
            .opponent(4, PlayerRole::CentreBack, Vec2::new(0.0, 0.2))
            .ball_owned_by_them(4)
            .build();
        assert_eq!(ForwardHandler.defend(&RoleContext::new(&far, 10, &cfg)).path, DecisionPath::Defend);
    }

    #[test]
    fn test_contest_by_ball_half() {
        let cfg = TacticsConfig::default();
        let ahead = striker(Vec2::new(0.2, 0.0)).ball_at(Vec2::new(0.5, 0.0)).build();
        assert_eq!(
            ForwardHandler.contest(&RoleContext::new(&ahead, 10, &cfg)).action,
            Action::Sprint
        );

        let behind = striker(Vec2::new(0.2, 0.0)).ball_at(Vec2::new(-0.3, 0.0)).build();
        let d = ForwardHandler.contest(&RoleContext::new(&behind, 10, &cfg));
        assert_eq!(d.path, DecisionPath::Contest);
        assert_eq!(d.action, Action::Sprint);
    }
}
