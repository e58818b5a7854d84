//! Goalkeeper handler
//!
//! Distribution with the ball, line positioning off it, and coming off the
//! line when an opponent carries the ball close to goal.

use crate::engine::action::Action;
use crate::engine::constants::goal;
use crate::engine::evaluator::dribble::carry_target;
use crate::engine::evaluator::pass::pass_by_distance;
use crate::engine::evaluator::pressure::{is_tightly_pressed, release_pressure};
use crate::engine::evaluator::{ActionCandidate, Decision, DecisionPath};
use crate::engine::geometry::{distance, in_own_penalty_area};
use crate::engine::spatial::passing::{alternative_midfield_target, keeper_pass_target};
use crate::engine::spatial::positioning::{keeper_offensive_position, keeper_position};
use crate::engine::types::{PlayerRole, Possession};

use super::{chase_ball, RoleBehavior, RoleContext};

/// Handler for the goalkeeper
pub struct GoalkeeperHandler;

impl RoleBehavior for GoalkeeperHandler {
    fn name(&self) -> &'static str {
        "goalkeeper"
    }

    fn with_ball(&self, ctx: &RoleContext) -> Decision {
        if is_tightly_pressed(ctx.snapshot, ctx.agent, ctx.config) {
            return release_pressure(ctx.snapshot, ctx.agent, ctx.config);
        }
        distribute(ctx)
    }

    fn support(&self, ctx: &RoleContext) -> Decision {
        ctx.walk_to(keeper_offensive_position(ctx.ball()), DecisionPath::Support)
    }

    fn defend(&self, ctx: &RoleContext) -> Decision {
        if should_rush(ctx) {
            return rush(ctx);
        }
        ctx.run_to(keeper_position(ctx.ball(), ctx.config), DecisionPath::Defend)
    }

    fn contest(&self, ctx: &RoleContext) -> Decision {
        if in_own_penalty_area(ctx.ball()) {
            return chase_ball(ctx);
        }
        ctx.walk_to(keeper_position(ctx.ball(), ctx.config), DecisionPath::Contest)
    }
}

/// Opponent carrying the ball inside our box, close to goal
pub fn should_rush(ctx: &RoleContext) -> bool {
    let ball = ctx.ball();
    ctx.snapshot.possession() == Possession::Theirs
        && in_own_penalty_area(ball)
        && distance(ball, goal::OWN_CENTER) < ctx.config.distance.keeper_rush_distance
}

/// Straight at the ball, tackling once on top of it
fn rush(ctx: &RoleContext) -> Decision {
    if ctx.distance_to_ball() < ctx.config.distance.ball_very_close {
        log::debug!("keeper {} slides at the ball", ctx.agent);
        return Decision::new(Action::Sliding, DecisionPath::Rush);
    }
    ctx.walk_to(ctx.ball(), DecisionPath::Rush)
}

/// Pass out from the back, or carry a few steps when nobody is available
fn distribute(ctx: &RoleContext) -> Decision {
    let snapshot = ctx.snapshot;
    let Some(target) = keeper_pass_target(snapshot, ctx.agent, ctx.config) else {
        return carry_out(ctx);
    };

    let to = snapshot.teammates[target].position;
    let marked = snapshot.nearest_opponent_distance(to)
        < ctx.config.distance.pressure_distance * ctx.config.utility.pass.marked_scale;

    if marked {
        if let Some(alt) = alternative_midfield_target(snapshot, ctx.agent, Some(target), ctx.config) {
            let alt_pos = snapshot.teammates[alt].position;
            return Decision::new(Action::LongPass, DecisionPath::Distribution)
                .with_candidate(ActionCandidate::toward_teammate(Action::LongPass, 1.0, alt, alt_pos));
        }
        let role = snapshot.teammates[target].role;
        if !matches!(
            role,
            PlayerRole::CentralMid | PlayerRole::LeftMid | PlayerRole::RightMid
        ) {
            return carry_out(ctx);
        }
        return Decision::new(Action::LongPass, DecisionPath::Distribution)
            .with_candidate(ActionCandidate::toward_teammate(Action::LongPass, 1.0, target, to));
    }

    let action = pass_by_distance(ctx.position(), to, ctx.config);
    Decision::new(action, DecisionPath::Distribution)
        .with_candidate(ActionCandidate::toward_teammate(action, 1.0, target, to))
}

fn carry_out(ctx: &RoleContext) -> Decision {
    ctx.walk_to(carry_target(ctx.snapshot, ctx.agent, ctx.config), DecisionPath::Carry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::TacticsConfig;
    use crate::engine::scenario_builder::ScenarioBuilder;
    use crate::engine::types::Vec2;

    fn keeper() -> ScenarioBuilder {
        ScenarioBuilder::empty().teammate(0, PlayerRole::Goalkeeper, Vec2::new(-0.97, 0.0))
    }

    #[test]
    fn test_rush_heads_at_ball_then_slides() {
        let cfg = TacticsConfig::default();
        let snap = keeper()
            .opponent(9, PlayerRole::CentralForward, Vec2::new(-0.85, 0.0))
            .ball_owned_by_them(9)
            .build();
        let ctx = RoleContext::new(&snap, 0, &cfg);
        assert!(should_rush(&ctx));
        let d = GoalkeeperHandler.defend(&ctx);
        assert_eq!(d.path, DecisionPath::Rush);
        assert_eq!(d.action, Action::Right);

        let snap = keeper()
            .move_teammate(0, Vec2::new(-0.86, 0.0))
            .opponent(9, PlayerRole::CentralForward, Vec2::new(-0.85, 0.0))
            .ball_owned_by_them(9)
            .build();
        let d = GoalkeeperHandler.defend(&RoleContext::new(&snap, 0, &cfg));
        assert_eq!(d.action, Action::Sliding);
    }

    #[test]
    fn test_no_rush_outside_box_or_when_loose() {
        let cfg = TacticsConfig::default();
        let far = keeper()
            .opponent(9, PlayerRole::CentralForward, Vec2::new(-0.6, 0.0))
            .ball_owned_by_them(9)
            .build();
        let ctx = RoleContext::new(&far, 0, &cfg);
        assert!(!should_rush(&ctx));
        assert_eq!(GoalkeeperHandler.defend(&ctx).path, DecisionPath::Defend);

        let loose = keeper().ball_at(Vec2::new(-0.85, 0.0)).build();
        assert!(!should_rush(&RoleContext::new(&loose, 0, &cfg)));
    }

    #[test]
    fn test_distribution_short_to_open_back() {
        let cfg = TacticsConfig::default();
        let snap = keeper()
            .teammate(1, PlayerRole::CentreBack, Vec2::new(-0.82, 0.08))
            .opponent(9, PlayerRole::CentralForward, Vec2::new(-0.4, 0.0))
            .ball_owned_by_us(0)
            .build();
        let d = GoalkeeperHandler.with_ball(&RoleContext::new(&snap, 0, &cfg));
        assert_eq!(d.path, DecisionPath::Distribution);
        assert_eq!(d.action, Action::ShortPass);
    }

    #[test]
    fn test_marked_back_loses_to_free_midfielder() {
        let cfg = TacticsConfig::default();
        let snap = keeper()
            .teammate(1, PlayerRole::CentreBack, Vec2::new(-0.82, 0.08))
            .teammate(6, PlayerRole::CentralMid, Vec2::new(-0.1, 0.1))
            .opponent(9, PlayerRole::CentralForward, Vec2::new(-0.8, 0.1))
            .ball_owned_by_us(0)
            .build();
        let d = GoalkeeperHandler.with_ball(&RoleContext::new(&snap, 0, &cfg));
        assert_eq!(d.action, Action::LongPass);
        assert_eq!(d.candidate.and_then(|c| c.target), Some(6));
    }

    #[test]
    fn test_carries_when_alone() {
        let cfg = TacticsConfig::default();
        let snap = keeper().ball_owned_by_us(0).build();
        let d = GoalkeeperHandler.with_ball(&RoleContext::new(&snap, 0, &cfg));
        assert_eq!(d.path, DecisionPath::Carry);
        assert_eq!(d.action, Action::Right);
    }

    #[test]
    fn test_contest_chases_ball_in_box() {
        let cfg = TacticsConfig::default();
        let snap = keeper().ball_at(Vec2::new(-0.88, 0.1)).build();
        let d = GoalkeeperHandler.contest(&RoleContext::new(&snap, 0, &cfg));
        assert_eq!(d.path, DecisionPath::Contest);
        assert_eq!(d.action, Action::Sprint);
    }
}
