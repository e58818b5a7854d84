//! Restart handling (kick-off, goal kick, free kick, corner, throw-in, penalty)
//!
//! The taker runs a scripted action; everyone else walks (never sprints) to a
//! phase- and role-specific spot. All functions are pure over the snapshot.

use crate::engine::action::Action;
use crate::engine::constants::goal;
use crate::engine::evaluator::pass::pass_by_distance;
use crate::engine::evaluator::{ActionCandidate, Decision, DecisionPath};
use crate::engine::geometry::{distance, in_opponent_half};
use crate::engine::roles::RoleContext;
use crate::engine::snapshot::Snapshot;
use crate::engine::spatial::shooting::{distance_to_goal, shot_feasibility};
use crate::engine::types::{PlayerRole, Restart, RoleGroup, Vec2};

use super::set_piece_taker;

/// Keeper spot on our goal line during restarts
const GOAL_LINE: Vec2 = Vec2::new(goal::OWN_X + 0.01, 0.0);

/// Restart decision for an active agent
pub fn decide(restart: Restart, ctx: &RoleContext) -> Decision {
    let taker = set_piece_taker(ctx.snapshot) == Some(ctx.agent);
    match restart {
        Restart::KickOff if taker => restart_pass(ctx),
        Restart::KickOff => walk(ctx, kick_off_position(ctx)),
        Restart::GoalKick if taker => goal_kick(ctx),
        Restart::GoalKick => walk(ctx, goal_kick_position(ctx)),
        Restart::FreeKick if taker => free_kick(ctx),
        Restart::FreeKick => walk(ctx, free_kick_position(ctx)),
        Restart::Corner if taker => scripted(Action::HighPass),
        Restart::Corner => walk(ctx, corner_position(ctx)),
        Restart::ThrowIn if taker => restart_pass(ctx),
        Restart::ThrowIn => match throw_in_position(ctx) {
            Some(target) => walk(ctx, target),
            None => scripted(Action::Idle),
        },
        Restart::Penalty => penalty(ctx, taker),
    }
}

fn scripted(action: Action) -> Decision {
    Decision::new(action, DecisionPath::SetPiece)
}

fn walk(ctx: &RoleContext, target: Vec2) -> Decision {
    ctx.walk_to(target, DecisionPath::SetPiece)
}

fn pass_to(ctx: &RoleContext, action: Action, receiver: usize) -> Decision {
    let to = ctx.snapshot.teammates[receiver].position;
    scripted(action).with_candidate(ActionCandidate::toward_teammate(action, 1.0, receiver, to))
}

/// Nearest other active teammate with its distance
fn nearest_teammate(snapshot: &Snapshot, agent: usize) -> Option<(usize, f32)> {
    let from = snapshot.teammates[agent].position;
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in snapshot.active_teammates() {
        if i == agent {
            continue;
        }
        let d = distance(from, p.position);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best
}

// ============================================================================
// Kick-off and throw-in
// ============================================================================

/// Short pass to the nearest teammate within range, otherwise a long ball
fn restart_pass(ctx: &RoleContext) -> Decision {
    match nearest_teammate(ctx.snapshot, ctx.agent) {
        Some((i, d)) if d < ctx.config.distance.short_pass_range => pass_to(ctx, Action::ShortPass, i),
        _ => scripted(Action::LongPass),
    }
}

pub fn kick_off_position(ctx: &RoleContext) -> Vec2 {
    let me = ctx.me();
    match me.role.group() {
        RoleGroup::Goalkeeper => Vec2::new(goal::OWN_X + 0.03, 0.0),
        RoleGroup::Defender => Vec2::new(-0.2, me.position.y),
        RoleGroup::Midfielder => {
            let y = match me.role {
                PlayerRole::LeftMid => -0.15,
                PlayerRole::RightMid => 0.15,
                _ => 0.0,
            };
            Vec2::new(-0.1, y)
        }
        RoleGroup::Forward => Vec2::new(0.05, 0.0),
    }
}

/// Drift toward the ball when it sits on the touchline; `None` means hold
pub fn throw_in_position(ctx: &RoleContext) -> Option<Vec2> {
    let ball = ctx.ball();
    (ball.y.abs() > 0.35).then(|| Vec2::new(ball.x - 0.05, ball.y * 0.8))
}

// ============================================================================
// Goal kick
// ============================================================================

/// Receiver with the most room from the nearest opponent
pub fn safest_goal_kick_target(snapshot: &Snapshot, agent: usize) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut max_safety = 0.0;
    for (i, p) in snapshot.active_teammates() {
        if i == agent {
            continue;
        }
        let safety = snapshot.nearest_opponent_distance(p.position);
        if safety > max_safety {
            max_safety = safety;
            best = Some(i);
        }
    }
    best
}

fn goal_kick(ctx: &RoleContext) -> Decision {
    match safest_goal_kick_target(ctx.snapshot, ctx.agent) {
        Some(i) => {
            let to = ctx.snapshot.teammates[i].position;
            pass_to(ctx, pass_by_distance(ctx.position(), to, ctx.config), i)
        }
        None => scripted(Action::LongPass),
    }
}

pub fn goal_kick_position(ctx: &RoleContext) -> Vec2 {
    let me = ctx.me();
    match me.role {
        PlayerRole::Goalkeeper => GOAL_LINE,
        PlayerRole::LeftBack => Vec2::new(goal::OWN_X + 0.2, -0.2),
        PlayerRole::RightBack => Vec2::new(goal::OWN_X + 0.2, 0.2),
        PlayerRole::CentreBack => Vec2::new(goal::OWN_X + 0.2, me.position.y * 0.5),
        PlayerRole::LeftMid => Vec2::new(-0.1, -0.25),
        PlayerRole::RightMid => Vec2::new(-0.1, 0.25),
        PlayerRole::DefenceMid | PlayerRole::CentralMid | PlayerRole::AttackMid => Vec2::new(-0.1, 0.0),
        PlayerRole::CentralForward => Vec2::ZERO,
    }
}

// ============================================================================
// Free kick
// ============================================================================

/// Receiver close to goal, in space, preferably in the opponent half
pub fn free_kick_target(snapshot: &Snapshot, agent: usize) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in snapshot.active_teammates() {
        if i == agent {
            continue;
        }
        let mut score = (1.0 - distance_to_goal(p.position)) * 2.0;
        score += snapshot.nearest_opponent_distance(p.position).min(1.0);
        if in_opponent_half(p.position) {
            score += 1.0;
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}

fn free_kick(ctx: &RoleContext) -> Decision {
    let ball = ctx.ball();
    let cfg = ctx.config;
    if shot_feasibility(ctx.position(), ball, cfg) && distance_to_goal(ball) < cfg.distance.shot_range {
        return scripted(Action::Shot);
    }
    match free_kick_target(ctx.snapshot, ctx.agent) {
        Some(i) => {
            let d = distance(ball, ctx.snapshot.teammates[i].position);
            let action = if d > cfg.distance.long_pass_range * 0.5 {
                Action::HighPass
            } else {
                Action::ShortPass
            };
            pass_to(ctx, action, i)
        }
        None => scripted(Action::HighPass),
    }
}

pub fn free_kick_position(ctx: &RoleContext) -> Vec2 {
    let me = ctx.me();
    let pos = me.position;
    if in_opponent_half(ctx.ball()) {
        return match me.role {
            PlayerRole::CentralForward => Vec2::new(goal::OPPONENT_X - 0.1, 0.0),
            PlayerRole::CentreBack => Vec2::new(goal::OPPONENT_X - 0.15, pos.y),
            PlayerRole::CentralMid | PlayerRole::AttackMid => Vec2::new(goal::OPPONENT_X - 0.25, 0.0),
            _ => pos,
        };
    }
    match me.role.group() {
        RoleGroup::Goalkeeper => GOAL_LINE,
        RoleGroup::Defender => Vec2::new(goal::OWN_X + 0.15, pos.y),
        _ => Vec2::new(pos.x - 0.05, pos.y),
    }
}

// ============================================================================
// Corner
// ============================================================================

pub fn corner_position(ctx: &RoleContext) -> Vec2 {
    let me = ctx.me();
    match me.role {
        PlayerRole::CentralForward => Vec2::new(goal::OPPONENT_X - 0.02, goal::TOP_POST_Y + 0.02),
        PlayerRole::CentreBack => Vec2::new(goal::OPPONENT_X - 0.02, goal::BOTTOM_POST_Y - 0.02),
        PlayerRole::CentralMid | PlayerRole::AttackMid => Vec2::new(goal::OPPONENT_X - 0.08, 0.0),
        PlayerRole::Goalkeeper => GOAL_LINE,
        _ => Vec2::new(goal::OPPONENT_X - 0.2, me.position.y),
    }
}

// ============================================================================
// Penalty
// ============================================================================

/// Keeper dives toward the side the ball is travelling; the taker shoots
fn penalty(ctx: &RoleContext, taker: bool) -> Decision {
    if ctx.me().role == PlayerRole::Goalkeeper {
        return scripted(penalty_dive(ctx.snapshot.ball.direction));
    }
    if taker {
        return scripted(Action::Shot);
    }
    scripted(Action::Idle)
}

pub fn penalty_dive(ball_direction: Vec2) -> Action {
    if ball_direction.y < 0.0 {
        Action::Top
    } else if ball_direction.y > 0.0 {
        Action::Bottom
    } else {
        Action::Idle
    }
}
