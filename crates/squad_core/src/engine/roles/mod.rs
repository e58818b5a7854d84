//! Role-specific behavior handlers
//!
//! Each role group (GK, DEF, MID, FWD) has a dedicated handler. Normal play
//! picks the handler through a role-indexed table and then the branch by
//! possession:
//! - ours, agent holds the ball → `with_ball`
//! - ours, someone else holds it → `support`
//! - theirs → `defend`
//! - loose → `contest`

pub mod defender;
pub mod forward;
pub mod goalkeeper;
pub mod midfielder;

pub use defender::DefenderHandler;
pub use forward::ForwardHandler;
pub use goalkeeper::GoalkeeperHandler;
pub use midfielder::MidfielderHandler;

use crate::engine::action::Action;
use crate::engine::config::TacticsConfig;
use crate::engine::constants::team;
use crate::engine::evaluator::movement::{is_tired, move_toward, step_toward};
use crate::engine::evaluator::{evaluate_with_ball, Decision, DecisionPath, RoleProfile};
use crate::engine::geometry::distance;
use crate::engine::snapshot::{PlayerSnap, Snapshot};
use crate::engine::types::{PlayerRole, Possession, Vec2};

/// Read-only view of the tick from one agent's perspective
#[derive(Debug, Clone, Copy)]
pub struct RoleContext<'a> {
    pub snapshot: &'a Snapshot,
    pub agent: usize,
    pub config: &'a TacticsConfig,
}

impl<'a> RoleContext<'a> {
    pub fn new(snapshot: &'a Snapshot, agent: usize, config: &'a TacticsConfig) -> Self {
        Self {
            snapshot,
            agent,
            config,
        }
    }

    pub fn me(&self) -> &'a PlayerSnap {
        &self.snapshot.teammates[self.agent]
    }

    pub fn position(&self) -> Vec2 {
        self.me().position
    }

    pub fn ball(&self) -> Vec2 {
        self.snapshot.ball.position
    }

    pub fn distance_to_ball(&self) -> f32 {
        distance(self.position(), self.ball())
    }

    pub fn profile(&self) -> &'a RoleProfile {
        self.config.utility.roles.get(self.me().role)
    }

    pub fn is_tired(&self) -> bool {
        is_tired(self.snapshot, self.agent, self.config)
    }

    /// Move toward `target` with the sprint override
    pub fn run_to(&self, target: Vec2, path: DecisionPath) -> Decision {
        Decision::new(move_toward(self.snapshot, self.agent, target, self.config), path)
    }

    /// Move toward `target` without sprinting
    pub fn walk_to(&self, target: Vec2, path: DecisionPath) -> Decision {
        Decision::new(step_toward(self.position(), target), path)
    }
}

/// Decision logic for one role group.
///
/// `with_ball` defaults to the shared utility evaluator; the other branches
/// are role-specific.
pub trait RoleBehavior: Send + Sync {
    fn name(&self) -> &'static str;

    fn with_ball(&self, ctx: &RoleContext) -> Decision {
        evaluate_with_ball(ctx.snapshot, ctx.agent, ctx.config)
    }

    /// Off-ball movement while a teammate has the ball
    fn support(&self, ctx: &RoleContext) -> Decision;

    /// Opponent has the ball
    fn defend(&self, ctx: &RoleContext) -> Decision;

    /// Nobody has the ball
    fn contest(&self, ctx: &RoleContext) -> Decision;
}

/// Handler per wire role id
pub static ROLE_TABLE: [&dyn RoleBehavior; team::ROLE_COUNT] = [
    &GoalkeeperHandler,
    &DefenderHandler,
    &DefenderHandler,
    &DefenderHandler,
    &MidfielderHandler,
    &MidfielderHandler,
    &MidfielderHandler,
    &MidfielderHandler,
    &MidfielderHandler,
    &ForwardHandler,
];

/// Get the handler for a role
pub fn handler_for_role(role: PlayerRole) -> &'static dyn RoleBehavior {
    ROLE_TABLE[role.index()]
}

/// Normal-play decision for one agent
pub fn decide_normal(ctx: &RoleContext) -> Decision {
    let handler = handler_for_role(ctx.me().role);
    match ctx.snapshot.possession() {
        Possession::Ours if ctx.snapshot.owns_ball(ctx.agent) => handler.with_ball(ctx),
        Possession::Ours => handler.support(ctx),
        Possession::Theirs => handler.defend(ctx),
        Possession::Loose => handler.contest(ctx),
    }
}

// ============================================================================
// Shared pressing and chasing
// ============================================================================

/// Close down the ball carrier: tackle when very close, step in when close,
/// otherwise run at the ball.
pub fn press_ball(ctx: &RoleContext) -> Decision {
    let d = &ctx.config.distance;
    let dist = ctx.distance_to_ball();
    if dist < d.ball_very_close {
        return Decision::new(Action::Sliding, DecisionPath::Press);
    }
    if dist < d.ball_close {
        return ctx.walk_to(ctx.ball(), DecisionPath::Press);
    }
    ctx.run_to(ctx.ball(), DecisionPath::Press)
}

/// Chase a loose ball: sprint in, then settle onto it
pub fn chase_ball(ctx: &RoleContext) -> Decision {
    if ctx.distance_to_ball() < ctx.config.distance.ball_close {
        return ctx.walk_to(ctx.ball(), DecisionPath::Contest);
    }
    ctx.run_to(ctx.ball(), DecisionPath::Contest)
}

/// Within the role's press trigger of the ball
pub fn within_press_range(ctx: &RoleContext) -> bool {
    ctx.distance_to_ball() < ctx.config.distance.pressure_distance * ctx.profile().press_trigger_scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scenario_builder::ScenarioBuilder;

    #[test]
    fn test_handler_selection() {
        assert_eq!(handler_for_role(PlayerRole::Goalkeeper).name(), "goalkeeper");
        for role in [PlayerRole::CentreBack, PlayerRole::LeftBack, PlayerRole::RightBack] {
            assert_eq!(handler_for_role(role).name(), "defender");
        }
        for role in [
            PlayerRole::DefenceMid,
            PlayerRole::CentralMid,
            PlayerRole::LeftMid,
            PlayerRole::RightMid,
            PlayerRole::AttackMid,
        ] {
            assert_eq!(handler_for_role(role).name(), "midfielder");
        }
        assert_eq!(handler_for_role(PlayerRole::CentralForward).name(), "forward");
    }

    #[test]
    fn test_press_escalates_with_distance() {
        let cfg = TacticsConfig::default();
        let build = |x: f32| {
            ScenarioBuilder::empty()
                .teammate(1, PlayerRole::CentreBack, Vec2::new(-0.5, 0.0))
                .opponent(9, PlayerRole::CentralForward, Vec2::new(x, 0.0))
                .ball_owned_by_them(9)
                .build()
        };
        let tackle = build(-0.49);
        assert_eq!(press_ball(&RoleContext::new(&tackle, 1, &cfg)).action, Action::Sliding);

        let step = build(-0.48);
        assert_eq!(press_ball(&RoleContext::new(&step, 1, &cfg)).action, Action::Right);

        let run = build(-0.3);
        assert_eq!(press_ball(&RoleContext::new(&run, 1, &cfg)).action, Action::Sprint);
    }

    #[test]
    fn test_possession_branches() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::new().ball_owned_by_us(6).build();
        assert_eq!(decide_normal(&RoleContext::new(&snap, 9, &cfg)).path, DecisionPath::Support);
        assert_ne!(decide_normal(&RoleContext::new(&snap, 6, &cfg)).path, DecisionPath::Support);
    }
}
