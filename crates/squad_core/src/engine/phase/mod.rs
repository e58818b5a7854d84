//! # Game-Phase Dispatcher
//!
//! Routes one agent's tick by the current game phase. The simulation owns
//! phase transitions; this layer only reads the phase from the snapshot.
//!
//! - `Normal`: role handler by possession (see `roles`)
//! - restarts: the set-piece taker runs a scripted action, everyone else
//!   walks to a phase- and role-specific spot (see `set_pieces`)
//! - inactive agents always hold

pub mod set_pieces;

use crate::engine::action::Action;
use crate::engine::config::TacticsConfig;
use crate::engine::evaluator::{Decision, DecisionPath};
use crate::engine::geometry::distance;
use crate::engine::roles::{decide_normal, RoleContext};
use crate::engine::snapshot::Snapshot;

/// Desired action for one agent, before legality and continuity
pub fn decide(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Decision {
    if !snapshot.teammates[agent].active {
        return Decision::new(Action::Idle, DecisionPath::Inactive);
    }
    let ctx = RoleContext::new(snapshot, agent, config);
    match snapshot.phase.restart() {
        None => decide_normal(&ctx),
        Some(restart) => set_pieces::decide(restart, &ctx),
    }
}

/// Active teammate strictly closest to the ball; the first scanned index
/// keeps the role on equal distances.
pub fn set_piece_taker(snapshot: &Snapshot) -> Option<usize> {
    let ball = snapshot.ball.position;
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in snapshot.active_teammates() {
        let d = distance(p.position, ball);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
