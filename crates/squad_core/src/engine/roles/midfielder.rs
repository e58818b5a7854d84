//! Midfielder handler (DM, CM, LM, RM, AM)
//!
//! Support spots follow the ball: the attacking mid pushes between the
//! lines, wide mids keep the channels, central and holding mids recycle
//! behind the ball.

use crate::engine::evaluator::{Decision, DecisionPath};
use crate::engine::geometry::{clamp_to_pitch, in_opponent_half};
use crate::engine::spatial::positioning::{
    contention_support_position, defensive_target_position, is_closest_in_group,
};
use crate::engine::types::{PlayerRole, Vec2};

use super::{chase_ball, press_ball, within_press_range, RoleBehavior, RoleContext};

/// Handler for every midfield role
pub struct MidfielderHandler;

impl RoleBehavior for MidfielderHandler {
    fn name(&self) -> &'static str {
        "midfielder"
    }

    fn support(&self, ctx: &RoleContext) -> Decision {
        ctx.run_to(support_position(ctx), DecisionPath::Support)
    }

    fn defend(&self, ctx: &RoleContext) -> Decision {
        if is_closest_in_group(ctx.snapshot, ctx.agent, ctx.ball()) && within_press_range(ctx) {
            return press_ball(ctx);
        }
        let target = defensive_target_position(ctx.snapshot, ctx.agent, ctx.config);
        ctx.run_to(target, DecisionPath::Defend)
    }

    fn contest(&self, ctx: &RoleContext) -> Decision {
        if is_closest_in_group(ctx.snapshot, ctx.agent, ctx.ball()) {
            return chase_ball(ctx);
        }
        let target = contention_support_position(ctx.me().role, ctx.ball(), ctx.config);
        ctx.run_to(target, DecisionPath::Contest)
    }
}

/// Off-ball spot while a teammate has the ball
pub fn support_position(ctx: &RoleContext) -> Vec2 {
    let ball = ctx.ball();
    let me = ctx.me();
    let p = &ctx.config.positioning;
    let attacking = in_opponent_half(ball);

    let target = match me.role {
        PlayerRole::AttackMid if attacking => Vec2::new((ball.x + 0.1).min(0.85), ball.y * 0.7),
        PlayerRole::AttackMid => Vec2::new((ball.x + 0.05).max(-0.1), me.position.y),
        PlayerRole::LeftMid | PlayerRole::RightMid => {
            let flank = me.role.flank_sign();
            if attacking {
                // Tuck in when the ball is already out on our wing
                let y = if ball.y * flank > 0.1 {
                    ball.y * 0.5
                } else {
                    flank * p.wide_channel_y
                };
                Vec2::new((ball.x + 0.05).min(0.8), y)
            } else {
                Vec2::new((ball.x + 0.05).max(p.mid_block_x + 0.05), flank * p.wide_channel_y)
            }
        }
        _ if attacking => Vec2::new(ball.x.min(0.1), ball.y * 0.3),
        _ => Vec2::new((ball.x - 0.05).max(p.mid_block_x), ball.y * 0.3),
    };
    clamp_to_pitch(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::action::Action;
    use crate::engine::config::TacticsConfig;
    use crate::engine::scenario_builder::ScenarioBuilder;

    fn midfield(carrier_at: Vec2) -> ScenarioBuilder {
        ScenarioBuilder::empty()
            .teammate(5, PlayerRole::DefenceMid, Vec2::new(-0.3, 0.0))
            .teammate(6, PlayerRole::CentralMid, Vec2::new(-0.2, 0.05))
            .teammate(7, PlayerRole::LeftMid, Vec2::new(-0.1, -0.25))
            .teammate(8, PlayerRole::RightMid, Vec2::new(-0.1, 0.25))
            .teammate(9, PlayerRole::AttackMid, Vec2::new(0.0, 0.0))
            .teammate(10, PlayerRole::CentralForward, carrier_at)
            .ball_owned_by_us(10)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn test_attacking_support_spots() {
        let cfg = TacticsConfig::default();
        let snap = midfield(Vec2::new(0.3, 0.2)).build();
        let spot = |agent| support_position(&RoleContext::new(&snap, agent, &cfg));

        assert!(close(spot(9), Vec2::new(0.4, 0.14)));
        // Ball on the right: RM tucks in, LM keeps the far channel
        assert!(close(spot(8), Vec2::new(0.35, 0.1)));
        assert!(close(spot(7), Vec2::new(0.35, -0.25)));
        assert!(close(spot(6), Vec2::new(0.1, 0.06)));
    }

    #[test]
    fn test_build_up_support_spots() {
        let cfg = TacticsConfig::default();
        let snap = midfield(Vec2::new(-0.4, 0.0)).build();
        let spot = |agent| support_position(&RoleContext::new(&snap, agent, &cfg));

        assert!(close(spot(5), Vec2::new(-0.2, 0.0)));
        assert!(close(spot(9), Vec2::new(-0.1, 0.0)));
        assert!(close(spot(8), Vec2::new(-0.15, 0.25)));
    }

    #[test]
    fn test_support_uses_support_path() {
        let cfg = TacticsConfig::default();
        let snap = midfield(Vec2::new(0.3, 0.2)).build();
        for agent in 5..=9 {
            let d = MidfielderHandler.support(&RoleContext::new(&snap, agent, &cfg));
            assert_eq!(d.path, DecisionPath::Support);
        }
    }

    #[test]
    fn test_only_closest_midfielder_presses() {
        let cfg = TacticsConfig::default();
        let snap = midfield(Vec2::new(0.5, 0.0))
            .opponent(6, PlayerRole::CentralMid, Vec2::new(-0.25, 0.05))
            .ball_owned_by_them(6)
            .build();
        let presser = MidfielderHandler.defend(&RoleContext::new(&snap, 6, &cfg));
        assert_eq!(presser.path, DecisionPath::Press);
        assert_eq!(presser.action, Action::Left);

        let other = MidfielderHandler.defend(&RoleContext::new(&snap, 5, &cfg));
        assert_eq!(other.path, DecisionPath::Defend);
    }

    #[test]
    fn test_contest_closest_chases_rest_support() {
        let cfg = TacticsConfig::default();
        let snap = midfield(Vec2::new(0.5, 0.0))
            .ball_loose()
            .ball_at(Vec2::new(0.05, 0.0))
            .build();
        let chaser = MidfielderHandler.contest(&RoleContext::new(&snap, 9, &cfg));
        assert_eq!(chaser.path, DecisionPath::Contest);
        assert_eq!(chaser.action, Action::Right);

        let wide = MidfielderHandler.contest(&RoleContext::new(&snap, 7, &cfg));
        assert_eq!(wide.path, DecisionPath::Contest);
    }
}
