//! Defender handler (CB, LB, RB)

use crate::engine::evaluator::{Decision, DecisionPath};
use crate::engine::geometry::clamp_to_pitch;
use crate::engine::spatial::lines::{centre_backs_holding, flank_needs_support};
use crate::engine::spatial::positioning::{defensive_target_position, is_closest_in_group};
use crate::engine::types::Vec2;

use super::{chase_ball, press_ball, within_press_range, RoleBehavior, RoleContext};

/// Handler for centre-backs and fullbacks
pub struct DefenderHandler;

impl RoleBehavior for DefenderHandler {
    fn name(&self) -> &'static str {
        "defender"
    }

    fn support(&self, ctx: &RoleContext) -> Decision {
        if let Some(target) = overlap_target(ctx) {
            return ctx.run_to(target, DecisionPath::Support);
        }
        let pos = ctx.position();
        let target = Vec2::new((ctx.ball().x - 0.15).max(-0.8), pos.y);
        ctx.run_to(clamp_to_pitch(target), DecisionPath::Support)
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
        let target = defensive_target_position(ctx.snapshot, ctx.agent, ctx.config);
        ctx.run_to(target, DecisionPath::Contest)
    }
}

/// Fullback run up the flank.
///
/// Only with the ball in the opponent half, at least two centre-backs
/// holding and the same-side midfielder already advanced.
pub fn overlap_target(ctx: &RoleContext) -> Option<Vec2> {
    let me = ctx.me();
    if !me.role.is_fullback() || ctx.ball().x <= 0.0 {
        return None;
    }
    if centre_backs_holding(ctx.snapshot, ctx.config) < 2
        || !flank_needs_support(ctx.snapshot, me.role, ctx.config)
    {
        return None;
    }
    let p = &ctx.config.positioning;
    Some(Vec2::new(
        (me.position.x + 0.2).min(p.attack_x_threshold),
        me.role.flank_sign() * p.wide_channel_y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::action::Action;
    use crate::engine::config::TacticsConfig;
    use crate::engine::scenario_builder::ScenarioBuilder;
    use crate::engine::types::PlayerRole;

    fn back_four() -> ScenarioBuilder {
        ScenarioBuilder::empty()
            .teammate(1, PlayerRole::CentreBack, Vec2::new(-0.5, -0.06))
            .teammate(2, PlayerRole::CentreBack, Vec2::new(-0.5, 0.06))
            .teammate(3, PlayerRole::LeftBack, Vec2::new(-0.3, -0.25))
            .teammate(4, PlayerRole::RightBack, Vec2::new(-0.3, 0.25))
    }

    #[test]
    fn test_closest_defender_presses() {
        let cfg = TacticsConfig::default();
        let snap = back_four()
            .opponent(9, PlayerRole::CentralForward, Vec2::new(-0.45, -0.06))
            .ball_owned_by_them(9)
            .build();
        let presser = DefenderHandler.defend(&RoleContext::new(&snap, 1, &cfg));
        assert_eq!(presser.path, DecisionPath::Press);
        assert_eq!(presser.action, Action::Right);

        let cover = DefenderHandler.defend(&RoleContext::new(&snap, 2, &cfg));
        assert_eq!(cover.path, DecisionPath::Defend);
    }

    #[test]
    fn test_far_ball_holds_shape() {
        let cfg = TacticsConfig::default();
        let snap = back_four()
            .opponent(9, PlayerRole::CentralForward, Vec2::new(0.2, 0.0))
            .ball_owned_by_them(9)
            .build();
        for agent in 1..=4 {
            let d = DefenderHandler.defend(&RoleContext::new(&snap, agent, &cfg));
            assert_eq!(d.path, DecisionPath::Defend);
        }
    }

    #[test]
    fn test_fullback_overlaps_advanced_winger() {
        let cfg = TacticsConfig::default();
        let attack = back_four()
            .teammate(6, PlayerRole::CentralMid, Vec2::new(0.1, 0.0))
            .teammate(7, PlayerRole::LeftMid, Vec2::new(0.3, -0.25))
            .ball_owned_by_us(6);

        let snap = attack.clone().build();
        let target = overlap_target(&RoleContext::new(&snap, 3, &cfg)).unwrap();
        assert!((target.x - (-0.1)).abs() < 1e-6);
        assert_eq!(target.y, -0.25);
        // No winger on the right
        assert_eq!(overlap_target(&RoleContext::new(&snap, 4, &cfg)), None);
        // Centre-backs never overlap
        assert_eq!(overlap_target(&RoleContext::new(&snap, 1, &cfg)), None);

        // One centre-back pushed up: nobody covers, stay home
        let exposed = attack.move_teammate(2, Vec2::new(-0.1, 0.06)).build();
        assert_eq!(overlap_target(&RoleContext::new(&exposed, 3, &cfg)), None);
    }

    #[test]
    fn test_support_trails_ball() {
        let cfg = TacticsConfig::default();
        let snap = back_four()
            .teammate(6, PlayerRole::CentralMid, Vec2::new(-0.1, 0.0))
            .ball_owned_by_us(6)
            .build();
        // Trail spot is (-0.25, -0.06): a long way forward for the CB
        let d = DefenderHandler.support(&RoleContext::new(&snap, 1, &cfg));
        assert_eq!(d.path, DecisionPath::Support);
        assert_eq!(d.action, Action::Sprint);
    }

    #[test]
    fn test_contest_closest_chases() {
        let cfg = TacticsConfig::default();
        let snap = back_four().ball_at(Vec2::new(-0.45, 0.25)).build();
        let chaser = DefenderHandler.contest(&RoleContext::new(&snap, 4, &cfg));
        assert_eq!(chaser.path, DecisionPath::Contest);
        assert_eq!(chaser.action, Action::Sprint);
        // Everyone else falls back to shape, still on the contest path
        let other = DefenderHandler.contest(&RoleContext::new(&snap, 1, &cfg));
        assert_eq!(other.path, DecisionPath::Contest);
    }
}
