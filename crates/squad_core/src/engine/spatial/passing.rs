//! Pass target selection
//!
//! Three rankers share the same candidate filter (active, not the passer,
//! own-goal guard for keepers and backs):
//! - `best_pass_target`: weighted attacking value
//! - `safest_pass_target`: maximal clearance, used under pressure
//! - `keeper_pass_target`: conservative distribution from the goalkeeper

use crate::engine::config::TacticsConfig;
use crate::engine::constants::goal;
use crate::engine::geometry::{distance, is_path_clear};
use crate::engine::snapshot::Snapshot;
use crate::engine::types::{PlayerRole, RoleGroup, Vec2};

/// Receivers whose goal distance does not beat the passer's by the margin
/// are never valid for a goalkeeper or defender.
pub fn violates_own_goal_guard(
    snapshot: &Snapshot,
    passer: usize,
    receiver: usize,
    config: &TacticsConfig,
) -> bool {
    let passer_snap = &snapshot.teammates[passer];
    if !passer_snap.role.group().guards_own_goal() {
        return false;
    }
    let passer_goal = distance(passer_snap.position, goal::OWN_CENTER);
    let receiver_goal = distance(snapshot.teammates[receiver].position, goal::OWN_CENTER);
    receiver_goal <= passer_goal + config.distance.own_goal_margin
}

/// Active teammates the passer may legally target
pub fn pass_candidates<'a>(
    snapshot: &'a Snapshot,
    passer: usize,
    config: &'a TacticsConfig,
) -> impl Iterator<Item = usize> + 'a {
    snapshot
        .active_teammates()
        .map(|(i, _)| i)
        .filter(move |&i| i != passer && !violates_own_goal_guard(snapshot, passer, i, config))
}

/// Weighted value of passing from `passer` to `receiver`
pub fn pass_score(snapshot: &Snapshot, passer: usize, receiver: usize, config: &TacticsConfig) -> f32 {
    let w = &config.utility.pass;
    let d = &config.distance;
    let from = snapshot.teammates[passer].position;
    let recv = &snapshot.teammates[receiver];
    let to = recv.position;
    let opponents = snapshot.opponent_positions();

    let dx = to.x - from.x;
    let pass_distance = distance(from, to);
    let mut score = 0.0;

    // Progress
    if dx >= 0.0 {
        score += dx * w.forward_progress;
    } else {
        score += dx * w.backward_progress;
        if from.x < 0.0 {
            score += dx * w.own_half_backward_extra;
        }
    }

    // Lane
    score += if is_path_clear(from, to, &opponents, d.lane_threshold) {
        w.lane_clear
    } else {
        w.lane_blocked
    };

    // Receiver space
    let space = snapshot.nearest_opponent_distance(to);
    score += space.min(d.receiver_space_cap) / d.receiver_space_cap * w.receiver_space;

    // Role value
    score += config.utility.roles.get(recv.role).receiver_value;

    // Field position
    if to.x > 0.0 {
        score += w.field_position_base + w.field_position_slope * to.x;
    }

    // Distance suitability
    if pass_distance > d.short_pass_range * 0.5 && pass_distance < d.short_pass_range {
        score += w.short_band_bonus;
    } else if pass_distance >= d.short_pass_range
        && pass_distance <= d.long_pass_range
        && dx > w.long_forward_min_dx
    {
        score += w.long_forward_bonus;
    } else if pass_distance > d.long_pass_range {
        score += w.out_of_range_penalty;
    }

    // Marked receiver
    if space < d.pressure_distance * w.marked_scale {
        score += w.marked_penalty;
    }

    score
}

/// Highest-scoring receiver, first index on ties
pub fn best_pass_target(snapshot: &Snapshot, passer: usize, config: &TacticsConfig) -> Option<usize> {
    best_pass_with_score(snapshot, passer, config).map(|(i, _)| i)
}

/// Highest-scoring receiver together with its score
pub fn best_pass_with_score(
    snapshot: &Snapshot,
    passer: usize,
    config: &TacticsConfig,
) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for receiver in pass_candidates(snapshot, passer, config) {
        let score = pass_score(snapshot, passer, receiver, config);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((receiver, score));
        }
    }
    best
}

/// Receiver with the most room around them, preferring the short band
pub fn safest_pass_target(snapshot: &Snapshot, passer: usize, config: &TacticsConfig) -> Option<usize> {
    let from = snapshot.teammates[passer].position;
    let short = config.distance.short_pass_range;

    let mut best: Option<usize> = None;
    let mut best_score = 0.0;
    for receiver in pass_candidates(snapshot, passer, config) {
        let to = snapshot.teammates[receiver].position;
        let mut safety = snapshot.nearest_opponent_distance(to);
        let d = distance(from, to);
        if d > short * 0.5 && d < short {
            safety += 0.02;
        }
        if safety > best_score {
            best_score = safety;
            best = Some(receiver);
        }
    }
    best
}

/// Goalkeeper distribution: far from our goal, backs and mids first, open
/// lane, away from the touchline.
pub fn keeper_pass_target(snapshot: &Snapshot, keeper: usize, config: &TacticsConfig) -> Option<usize> {
    let from = snapshot.teammates[keeper].position;
    let opponents = snapshot.opponent_positions();
    let short = config.distance.short_pass_range;

    let mut best: Option<usize> = None;
    let mut best_score = -1.0;
    for receiver in pass_candidates(snapshot, keeper, config) {
        let recv = &snapshot.teammates[receiver];
        let mut score = distance(recv.position, goal::OWN_CENTER) * 3.0;

        score += match recv.role {
            PlayerRole::CentreBack | PlayerRole::LeftBack | PlayerRole::RightBack => 2.0,
            PlayerRole::CentralMid | PlayerRole::LeftMid | PlayerRole::RightMid => 1.5,
            _ => 0.0,
        };

        score += snapshot.nearest_opponent_distance(recv.position).min(0.5) * 2.0;

        let d = distance(from, recv.position);
        if d > short * 0.5 && d < short * 1.2 {
            score += 1.0;
        }

        score += if is_path_clear(from, recv.position, &opponents, config.distance.lane_threshold) {
            1.5
        } else {
            -1.0
        };

        if recv.position.y.abs() > 0.35 {
            score -= 0.5;
        }

        if score > best_score {
            best_score = score;
            best = Some(receiver);
        }
    }
    best
}

/// First unmarked midfielder at or beyond the middle third, skipping `exclude`
pub fn alternative_midfield_target(
    snapshot: &Snapshot,
    passer: usize,
    exclude: Option<usize>,
    config: &TacticsConfig,
) -> Option<usize> {
    pass_candidates(snapshot, passer, config).find(|&i| {
        let recv = &snapshot.teammates[i];
        Some(i) != exclude
            && recv.role.group() == RoleGroup::Midfielder
            && recv.role != PlayerRole::DefenceMid
            && recv.role != PlayerRole::AttackMid
            && recv.position.x > -0.2
            && snapshot.nearest_opponent_distance(recv.position) > config.distance.pressure_distance
    })
}

/// Upfield point on the passer's flank that a clearance aims for
pub fn clearance_target(from: Vec2) -> Vec2 {
    let side = if from.y < 0.0 { -1.0 } else { 1.0 };
    Vec2::new((from.x + 0.4).min(0.2), side * 0.3)
}

/// Clearance lane toward `clearance_target` under the stricter threshold
pub fn clearance_lane_open(snapshot: &Snapshot, passer: usize, config: &TacticsConfig) -> bool {
    let from = snapshot.teammates[passer].position;
    is_path_clear(
        from,
        clearance_target(from),
        &snapshot.opponent_positions(),
        config.distance.defensive_lane_threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scenario_builder::ScenarioBuilder;

    #[test]
    fn test_best_pass_never_self_or_inactive() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::new()
            .ball_owned_by_us(5)
            .teammate_inactive(6)
            .build();
        for _ in 0..2 {
            let target = best_pass_target(&snap, 5, &cfg).unwrap();
            assert_ne!(target, 5);
            assert_ne!(target, 6);
        }
    }

    #[test]
    fn test_forward_open_receiver_preferred() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::CentralMid, Vec2::new(0.0, 0.0))
            .teammate(1, PlayerRole::CentralForward, Vec2::new(0.25, 0.05))
            .teammate(2, PlayerRole::CentreBack, Vec2::new(-0.25, 0.0))
            .ball_owned_by_us(0)
            .build();
        assert_eq!(best_pass_target(&snap, 0, &cfg), Some(1));
    }

    #[test]
    fn test_own_goal_guard_excludes_receivers_nearer_goal() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::CentreBack, Vec2::new(-0.6, 0.0))
            .teammate(1, PlayerRole::Goalkeeper, Vec2::new(-0.98, 0.0))
            .teammate(2, PlayerRole::LeftBack, Vec2::new(-0.59, -0.01))
            .ball_owned_by_us(0)
            .build();
        assert!(violates_own_goal_guard(&snap, 0, 1, &cfg));
        // Within the margin counts as a violation
        assert!(violates_own_goal_guard(&snap, 0, 2, &cfg));
        assert_eq!(best_pass_target(&snap, 0, &cfg), None);
        assert_eq!(safest_pass_target(&snap, 0, &cfg), None);
    }

    #[test]
    fn test_midfielders_are_not_guarded() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::CentralMid, Vec2::new(-0.2, 0.0))
            .teammate(1, PlayerRole::CentreBack, Vec2::new(-0.6, 0.0))
            .ball_owned_by_us(0)
            .build();
        assert!(!violates_own_goal_guard(&snap, 0, 1, &cfg));
        assert_eq!(best_pass_target(&snap, 0, &cfg), Some(1));
    }

    #[test]
    fn test_blocked_lane_lowers_score() {
        let cfg = TacticsConfig::default();
        let base = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::CentralMid, Vec2::new(0.0, 0.0))
            .teammate(1, PlayerRole::CentralForward, Vec2::new(0.3, 0.0))
            .ball_owned_by_us(0);
        let open = base.clone().build();
        let blocked = base.opponent(0, PlayerRole::CentreBack, Vec2::new(0.15, 0.01)).build();
        assert!(pass_score(&open, 0, 1, &cfg) > pass_score(&blocked, 0, 1, &cfg));
    }

    #[test]
    fn test_safest_prefers_space() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::CentralMid, Vec2::new(0.0, 0.0))
            .teammate(1, PlayerRole::CentralMid, Vec2::new(0.1, 0.1))
            .teammate(2, PlayerRole::CentralMid, Vec2::new(0.1, -0.1))
            .opponent(0, PlayerRole::CentralMid, Vec2::new(0.12, 0.1))
            .opponent(1, PlayerRole::CentralMid, Vec2::new(0.0, 0.3))
            .ball_owned_by_us(0)
            .build();
        assert_eq!(safest_pass_target(&snap, 0, &cfg), Some(2));
    }

    #[test]
    fn test_keeper_distributes_to_open_back() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::Goalkeeper, Vec2::new(-0.95, 0.0))
            .teammate(1, PlayerRole::CentreBack, Vec2::new(-0.75, 0.1))
            .teammate(2, PlayerRole::CentralForward, Vec2::new(-0.7, 0.4))
            .opponent(0, PlayerRole::CentralForward, Vec2::new(-0.4, 0.0))
            .ball_owned_by_us(0)
            .build();
        assert_eq!(keeper_pass_target(&snap, 0, &cfg), Some(1));
    }

    #[test]
    fn test_alternative_midfield_target_skips_marked_and_excluded() {
        let cfg = TacticsConfig::default();
        let snap = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::Goalkeeper, Vec2::new(-0.95, 0.0))
            .teammate(1, PlayerRole::CentralMid, Vec2::new(-0.1, 0.0))
            .teammate(2, PlayerRole::LeftMid, Vec2::new(0.0, -0.2))
            .teammate(3, PlayerRole::RightMid, Vec2::new(0.0, 0.2))
            .opponent(0, PlayerRole::CentralMid, Vec2::new(0.0, -0.19))
            .ball_owned_by_us(0)
            .build();
        assert_eq!(alternative_midfield_target(&snap, 0, Some(1), &cfg), Some(3));
    }

    #[test]
    fn test_clearance_lane() {
        let cfg = TacticsConfig::default();
        let deep = clearance_target(Vec2::new(-0.9, -0.1));
        assert!((deep.x - (-0.5)).abs() < 1e-6);
        assert_eq!(deep.y, -0.3);
        let high = clearance_target(Vec2::new(0.0, 0.1));
        assert!((high.x - 0.2).abs() < 1e-6);
        assert_eq!(high.y, 0.3);

        let base = ScenarioBuilder::empty()
            .teammate(0, PlayerRole::Goalkeeper, Vec2::new(-0.9, 0.0))
            .ball_owned_by_us(0);
        assert!(clearance_lane_open(&base.clone().build(), 0, &cfg));
        // Opponent sitting on the lane to (-0.5, 0.3)
        let blocked = base.opponent(9, PlayerRole::CentralForward, Vec2::new(-0.7, 0.15)).build();
        assert!(!clearance_lane_open(&blocked, 0, &cfg));
    }
}
