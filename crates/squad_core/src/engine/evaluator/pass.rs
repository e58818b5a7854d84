//! Pass utility and pass-kind selection

use crate::engine::action::Action;
use crate::engine::config::TacticsConfig;
use crate::engine::geometry::{angle_between_deg, distance};
use crate::engine::snapshot::Snapshot;
use crate::engine::spatial::passing::best_pass_with_score;
use crate::engine::types::Vec2;

/// Chosen receiver with the pass action and its utility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassChoice {
    pub receiver: usize,
    pub action: Action,
    pub utility: f32,
}

/// Pass action for a given lane, plus the utility adjustment it carries
pub fn pass_kind(from: Vec2, to: Vec2, config: &TacticsConfig) -> (Action, f32) {
    let w = &config.utility.pass;
    let d = distance(from, to);
    if d < config.distance.short_pass_range {
        return (Action::ShortPass, 0.0);
    }

    let delta = to - from;
    if delta.x > w.forward_min_dx {
        // Deviation from the x-axis, either direction
        let axis_dev = angle_between_deg(delta, Vec2::FORWARD).unwrap_or(90.0);
        if axis_dev <= config.angle.pass_axis_angle {
            return (Action::LongPass, 0.0);
        }
        if d > config.distance.long_pass_range * 0.5 {
            return (Action::HighPass, 0.0);
        }
        return (Action::LongPass, 0.0);
    }

    // Sideways or backward beyond the short band
    if delta.y.abs() >= w.switch_play_dy {
        (Action::LongPass, w.switch_play_bonus)
    } else {
        (Action::LongPass, -w.sideways_long_penalty)
    }
}

/// Pass action by distance alone, used on forced releases
pub fn pass_by_distance(from: Vec2, to: Vec2, config: &TacticsConfig) -> Action {
    if distance(from, to) < config.distance.short_pass_range {
        Action::ShortPass
    } else {
        Action::LongPass
    }
}

/// Best pass and its utility in [0, role multiplier]
pub fn evaluate_pass(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> Option<PassChoice> {
    let (receiver, score) = best_pass_with_score(snapshot, agent, config)?;
    let from = snapshot.teammates[agent].position;
    let to = snapshot.teammates[receiver].position;

    let base = (score / config.utility.pass.score_scale).clamp(0.0, 1.0);
    let (action, adjust) = pass_kind(from, to, config);
    let multiplier = config.utility.roles.get(snapshot.teammates[agent].role).pass_multiplier;

    Some(PassChoice {
        receiver,
        action,
        utility: (base + adjust).clamp(0.0, 1.0) * multiplier,
    })
}
