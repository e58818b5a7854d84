//! Release valve for a ball carrier under tight pressure

use crate::engine::action::Action;
use crate::engine::config::TacticsConfig;
use crate::engine::snapshot::Snapshot;
use crate::engine::spatial::passing::{clearance_lane_open, clearance_target, safest_pass_target};
use crate::engine::spatial::space::{best_escape_offset, ESCAPE_PROBES_TIGHT, ESCAPE_PROBES_WIDE};
use crate::engine::types::{PlayerRole, RoleGroup};

use super::movement::carry;
use super::pass::pass_by_distance;
use super::{ActionCandidate, Decision, DecisionPath};

/// Nearest opponent inside the role's tight pressure radius
pub fn is_tightly_pressed(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> bool {
    let me = &snapshot.teammates[agent];
    snapshot.nearest_opponent_distance(me.position)
        < config.utility.roles.get(me.role).tight_pressure_distance
}

/// Get rid of the ball or shield it.
///
/// Safest pass first, then (keepers and centre-backs) a clearance when even
/// the best escape stays inside the pressure radius, else a short escape
/// dribble toward the offset with the most room.
pub fn release_pressure(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Decision {
    let me = &snapshot.teammates[agent];

    if let Some(receiver) = safest_pass_target(snapshot, agent, config) {
        let to = snapshot.teammates[receiver].position;
        let action = pass_by_distance(me.position, to, config);
        return Decision::new(action, DecisionPath::PressureRelease)
            .with_candidate(ActionCandidate::toward_teammate(action, 1.0, receiver, to));
    }

    let probes: &[_] = if me.role.group() == RoleGroup::Forward {
        &ESCAPE_PROBES_TIGHT
    } else {
        &ESCAPE_PROBES_WIDE
    };
    let escape = best_escape_offset(snapshot, agent, probes);

    let can_clear = matches!(me.role, PlayerRole::Goalkeeper | PlayerRole::CentreBack);
    let trapped = escape.map_or(true, |(_, space)| space < config.distance.pressure_distance);
    if can_clear && trapped && clearance_lane_open(snapshot, agent, config) {
        log::debug!("agent {} clearing under pressure", agent);
        let target = clearance_target(me.position);
        return Decision::new(Action::LongPass, DecisionPath::Clearance)
            .with_candidate(ActionCandidate::toward_point(Action::LongPass, 1.0, target));
    }

    match escape {
        Some((offset, _)) => Decision::new(carry(snapshot, agent, offset), DecisionPath::PressureEscape),
        None => Decision::new(Action::Idle, DecisionPath::Hold),
    }
}
