//! Target → action conversion for movement
//!
//! Off-ball targets are turned into a heading, with a sprint override for
//! long runs and a release once the runner arrives.

use crate::engine::action::Action;
use crate::engine::config::TacticsConfig;
use crate::engine::geometry::{direction_to_heading, distance};
use crate::engine::snapshot::Snapshot;
use crate::engine::types::Vec2;

/// Fatigue above the configured threshold blocks sprinting
pub fn is_tired(snapshot: &Snapshot, agent: usize, config: &TacticsConfig) -> bool {
    snapshot.teammates[agent].fatigue > config.fatigue.tired_threshold
}

/// Heading toward `target`, IDLE when already there
pub fn step_toward(from: Vec2, target: Vec2) -> Action {
    direction_to_heading(from, target).map_or(Action::Idle, Action::from)
}

/// Move toward `target`, sprinting on long runs
pub fn move_toward(snapshot: &Snapshot, agent: usize, target: Vec2, config: &TacticsConfig) -> Action {
    let me = &snapshot.teammates[agent];
    let sticky = snapshot.sticky_for(agent);
    let dist = distance(me.position, target);

    if sticky.sprinting() && dist < config.distance.release_sprint_distance {
        return Action::ReleaseSprint;
    }

    let sprint_distance = config.utility.roles.get(me.role).sprint_distance;
    if dist > sprint_distance && !sticky.sprinting() && !is_tired(snapshot, agent, config) {
        return Action::Sprint;
    }

    step_toward(me.position, target)
}

/// Carry the ball along `direction`: start the dribble first, then steer
pub fn carry(snapshot: &Snapshot, agent: usize, direction: Vec2) -> Action {
    if !snapshot.sticky_for(agent).dribbling() {
        return Action::Dribble;
    }
    match direction.try_normalized() {
        Some(dir) => {
            let from = snapshot.teammates[agent].position;
            step_toward(from, from + dir * 0.05)
        }
        None => Action::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scenario_builder::ScenarioBuilder;
    use crate::engine::sticky::StickyActions;
    use crate::engine::types::{Heading, PlayerRole};

    fn runner() -> ScenarioBuilder {
        ScenarioBuilder::empty().teammate(5, PlayerRole::CentralMid, Vec2::new(0.0, 0.0))
    }

    #[test]
    fn test_long_run_sprints_when_fresh() {
        let cfg = TacticsConfig::default();
        let target = Vec2::new(0.3, 0.0);
        assert_eq!(move_toward(&runner().build(), 5, target, &cfg), Action::Sprint);

        let tired = runner().fatigue(5, 0.8).build();
        assert_eq!(move_toward(&tired, 5, target, &cfg), Action::Right);

        let sprinting = runner().sticky(5, StickyActions::NONE.with_sprint()).build();
        assert_eq!(move_toward(&sprinting, 5, target, &cfg), Action::Right);
    }

    #[test]
    fn test_short_move_is_heading() {
        let cfg = TacticsConfig::default();
        let snap = runner().build();
        assert_eq!(move_toward(&snap, 5, Vec2::new(0.0, -0.05), &cfg), Action::Top);
        assert_eq!(move_toward(&snap, 5, Vec2::new(0.005, 0.0), &cfg), Action::Idle);
    }

    #[test]
    fn test_release_sprint_on_arrival() {
        let cfg = TacticsConfig::default();
        let snap = runner().sticky(5, StickyActions::NONE.with_sprint()).build();
        assert_eq!(move_toward(&snap, 5, Vec2::new(0.02, 0.0), &cfg), Action::ReleaseSprint);
    }

    #[test]
    fn test_carry_starts_dribble_then_steers() {
        let snap = runner().ball_owned_by_us(5).build();
        assert_eq!(carry(&snap, 5, Vec2::FORWARD), Action::Dribble);

        let dribbling = runner()
            .ball_owned_by_us(5)
            .sticky(5, StickyActions::NONE.with_dribble())
            .build();
        assert_eq!(carry(&dribbling, 5, Vec2::new(1.0, 1.0)), Action::from(Heading::BottomRight));
        assert_eq!(carry(&dribbling, 5, Vec2::ZERO), Action::Idle);
    }
}
