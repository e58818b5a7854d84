//! # Utility Evaluator
//!
//! Scores the ball carrier's options and picks one discrete action.
//!
//! ## Design Principles
//! 1. **Pressure first**: a carrier inside the role's tight pressure radius
//!    releases the ball (or shields it) before any utility is computed.
//! 2. **Three-way contest**: shoot, pass and dribble utilities are compared;
//!    the winner must clear the role's commit threshold.
//! 3. **Always an answer**: when nothing commits, fall back to any pass, then
//!    a carry, then IDLE.
//!
//! ## Usage
//!
//! ```rust
//! use squad_core::engine::config::TacticsConfig;
//! use squad_core::engine::evaluator::evaluate_with_ball;
//! use squad_core::engine::scenario_builder::ScenarioBuilder;
//! use squad_core::engine::types::{PlayerRole, Vec2};
//! use squad_core::engine::action::Action;
//!
//! let snapshot = ScenarioBuilder::empty()
//!     .teammate(10, PlayerRole::CentralForward, Vec2::new(0.9, 0.0))
//!     .ball_owned_by_us(10)
//!     .build();
//! let decision = evaluate_with_ball(&snapshot, 10, &TacticsConfig::default());
//! assert_eq!(decision.action, Action::Shot);
//! ```

pub mod dribble;
pub mod movement;
pub mod pass;
pub mod pressure;
pub mod profile;
pub mod shoot;

use serde::{Deserialize, Serialize};

use crate::engine::action::Action;
use crate::engine::config::TacticsConfig;
use crate::engine::constants::goal;
use crate::engine::snapshot::Snapshot;
use crate::engine::spatial::space::check_dribble_space;
use crate::engine::types::Vec2;

pub use dribble::{carry_target, dribble_direction, dribble_utility};
pub use movement::{carry, move_toward, step_toward};
pub use pass::{evaluate_pass, pass_kind, PassChoice};
pub use pressure::{is_tightly_pressed, release_pressure};
pub use profile::{RoleProfile, RoleProfiles};
pub use shoot::shoot_utility;

// ============================================================================
// Candidates and decisions
// ============================================================================

/// Scored option for one agent in one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionCandidate {
    pub action: Action,
    pub utility: f32,
    pub target: Option<usize>,
    pub target_position: Option<Vec2>,
}

impl ActionCandidate {
    pub fn toward_teammate(action: Action, utility: f32, target: usize, position: Vec2) -> Self {
        Self {
            action,
            utility,
            target: Some(target),
            target_position: Some(position),
        }
    }

    pub fn toward_point(action: Action, utility: f32, position: Vec2) -> Self {
        Self {
            action,
            utility,
            target: None,
            target_position: Some(position),
        }
    }
}

/// Which branch of the decision logic produced an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionPath {
    /// Agent is not active in the simulation
    Inactive,
    /// Restart handling (taker or positioning)
    SetPiece,
    /// Safest pass under tight pressure
    PressureRelease,
    /// Escape dribble under tight pressure
    PressureEscape,
    /// Long clearance from the back
    Clearance,
    Shoot,
    Pass,
    Dribble,
    /// Goalkeeper distribution
    Distribution,
    /// Low-utility pass when nothing committed
    FallbackPass,
    /// Low-utility carry when nothing committed
    Carry,
    Hold,
    /// Off-ball positioning while we have the ball
    Support,
    /// Holding shape while the opponent has the ball
    Defend,
    /// Closing down the ball carrier
    Press,
    /// Goalkeeper coming off the line
    Rush,
    /// Chasing a loose ball
    Contest,
}

/// Action picked for one agent, with the path and winning candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub path: DecisionPath,
    pub candidate: Option<ActionCandidate>,
}

impl Decision {
    pub fn new(action: Action, path: DecisionPath) -> Self {
        Self {
            action,
            path,
            candidate: None,
        }
    }

    pub fn with_candidate(mut self, candidate: ActionCandidate) -> Self {
        self.candidate = Some(candidate);
        self
    }
}

// ============================================================================
// Ball carrier pipeline
// ============================================================================

/// Full decision for the agent holding the ball
pub fn evaluate_with_ball(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Decision {
    if is_tightly_pressed(snapshot, agent, config) {
        return release_pressure(snapshot, agent, config);
    }
    contest(snapshot, agent, config).unwrap_or_else(|| fallback(snapshot, agent, config))
}

/// Shoot / pass / dribble contest; `None` when the best utility does not
/// reach the role's commit threshold.
pub fn contest(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Option<Decision> {
    let role = snapshot.teammates[agent].role;
    let threshold = config.utility.roles.get(role).commit_threshold;

    let shot = ActionCandidate::toward_point(
        Action::Shot,
        shoot_utility(snapshot, agent, config),
        goal::OPPONENT_CENTER,
    );
    let pass = evaluate_pass(snapshot, agent, config).map(|choice| {
        ActionCandidate::toward_teammate(
            choice.action,
            choice.utility,
            choice.receiver,
            snapshot.teammates[choice.receiver].position,
        )
    });
    let direction = dribble_direction(snapshot, agent, config);
    let dribble = ActionCandidate::toward_point(
        carry(snapshot, agent, direction),
        dribble_utility(snapshot, agent, config),
        carry_target(snapshot, agent, config),
    );

    // Listed in tie-break order
    let options = [
        Some((shot, DecisionPath::Shoot)),
        pass.map(|c| (c, DecisionPath::Pass)),
        Some((dribble, DecisionPath::Dribble)),
    ];
    let mut best: Option<(ActionCandidate, DecisionPath)> = None;
    for (candidate, path) in options.into_iter().flatten() {
        if best.map_or(true, |(b, _)| candidate.utility > b.utility) {
            best = Some((candidate, path));
        }
    }

    let (winner, path) = best?;
    log::trace!(
        "agent {} contest: shot {:.3} pass {:?} dribble {:.3} -> {:?}",
        agent,
        shot.utility,
        pass.map(|c| c.utility),
        dribble.utility,
        path
    );
    if winner.utility < threshold || winner.utility <= 0.0 {
        return None;
    }
    Some(Decision::new(winner.action, path).with_candidate(winner))
}

/// Any pass, then a carry into open space, then hold
pub fn fallback(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Decision {
    if let Some(choice) = evaluate_pass(snapshot, agent, config) {
        let to = snapshot.teammates[choice.receiver].position;
        return Decision::new(choice.action, DecisionPath::FallbackPass).with_candidate(
            ActionCandidate::toward_teammate(choice.action, choice.utility, choice.receiver, to),
        );
    }

    let direction = dribble_direction(snapshot, agent, config);
    let (has_space, _) = check_dribble_space(snapshot, agent, direction, config);
    if has_space {
        return Decision::new(carry(snapshot, agent, direction), DecisionPath::Carry);
    }
    Decision::new(Action::Idle, DecisionPath::Hold)
}
