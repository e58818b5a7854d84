//! ScenarioBuilder - Declarative Snapshot Creation API
//!
//! Method-chained construction of a `Snapshot` for harnesses and tests,
//! using the same normalized coordinates as the simulation.
//!
//! ## Usage
//!
//! ```rust
//! use squad_core::engine::scenario_builder::ScenarioBuilder;
//! use squad_core::engine::types::{PlayerRole, Vec2};
//!
//! let snapshot = ScenarioBuilder::empty()
//!     .teammate(0, PlayerRole::CentralForward, Vec2::new(0.9, 0.0))
//!     .ball_owned_by_us(0)
//!     .build();
//! assert!(snapshot.owns_ball(0));
//! ```
//!
//! `new()` starts from a full 11-vs-11 kick-off shape, `empty()` from two
//! teams of inactive players that individual calls switch on.

use super::constants::{sticky, team};
use super::snapshot::{BallSnap, ObservationFrame, PlayerSnap, Snapshot};
use super::sticky::StickyActions;
use super::types::{GamePhase, PlayerRole, TeamSide, Vec2};

/// Default shape: GK, 2 CB, LB, RB, DM, CM, LM, RM, AM, CF
const FORMATION: [(PlayerRole, f32, f32); team::SIZE] = [
    (PlayerRole::Goalkeeper, -0.98, 0.0),
    (PlayerRole::CentreBack, -0.7, -0.06),
    (PlayerRole::CentreBack, -0.7, 0.06),
    (PlayerRole::LeftBack, -0.65, -0.25),
    (PlayerRole::RightBack, -0.65, 0.25),
    (PlayerRole::DefenceMid, -0.5, 0.0),
    (PlayerRole::CentralMid, -0.35, 0.05),
    (PlayerRole::LeftMid, -0.3, -0.25),
    (PlayerRole::RightMid, -0.3, 0.25),
    (PlayerRole::AttackMid, -0.2, 0.0),
    (PlayerRole::CentralForward, -0.05, 0.0),
];

/// Parked spot for inactive players in `empty()` scenarios
const PARKED: Vec2 = Vec2::new(0.0, 0.42);

#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    teammates: [PlayerSnap; team::SIZE],
    opponents: [PlayerSnap; team::SIZE],
    ball_pos: Option<Vec2>,
    ball_direction: Vec2,
    owner: Option<(TeamSide, usize)>,
    phase: GamePhase,
    sticky: [StickyActions; team::SIZE],
    score: (i32, i32),
    steps_left: i64,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Both teams in the default shape, ball loose on the centre spot
    pub fn new() -> Self {
        let ours = FORMATION.map(|(role, x, y)| PlayerSnap {
            position: Vec2::new(x, y),
            role,
            ..PlayerSnap::default()
        });
        // Mirror image for the opponents
        let theirs = FORMATION.map(|(role, x, y)| PlayerSnap {
            position: Vec2::new(-x, -y),
            role,
            ..PlayerSnap::default()
        });
        Self {
            teammates: ours,
            opponents: theirs,
            ball_pos: None,
            ball_direction: Vec2::ZERO,
            owner: None,
            phase: GamePhase::Normal,
            sticky: [StickyActions::NONE; team::SIZE],
            score: (0, 0),
            steps_left: 3000,
        }
    }

    /// Every player inactive and parked on the touchline
    pub fn empty() -> Self {
        let parked = PlayerSnap {
            position: PARKED,
            active: false,
            ..PlayerSnap::default()
        };
        Self {
            teammates: [parked; team::SIZE],
            opponents: [parked; team::SIZE],
            ..Self::new()
        }
    }

    /// Place (and activate) one of our players
    pub fn teammate(mut self, index: usize, role: PlayerRole, position: Vec2) -> Self {
        self.teammates[index] = PlayerSnap {
            position,
            role,
            active: true,
            ..self.teammates[index]
        };
        self
    }

    /// Place (and activate) one opponent
    pub fn opponent(mut self, index: usize, role: PlayerRole, position: Vec2) -> Self {
        self.opponents[index] = PlayerSnap {
            position,
            role,
            active: true,
            ..self.opponents[index]
        };
        self
    }

    pub fn teammate_inactive(mut self, index: usize) -> Self {
        self.teammates[index].active = false;
        self
    }

    pub fn opponent_inactive(mut self, index: usize) -> Self {
        self.opponents[index].active = false;
        self
    }

    pub fn move_teammate(mut self, index: usize, position: Vec2) -> Self {
        self.teammates[index].position = position;
        self
    }

    pub fn teammate_velocity(mut self, index: usize, velocity: Vec2) -> Self {
        self.teammates[index].velocity = velocity;
        self
    }

    pub fn fatigue(mut self, index: usize, fatigue: f32) -> Self {
        self.teammates[index].fatigue = fatigue.clamp(0.0, 1.0);
        self
    }

    /// Explicit ball position (otherwise the owner's position at build time)
    pub fn ball_at(mut self, position: Vec2) -> Self {
        self.ball_pos = Some(position);
        self
    }

    pub fn ball_direction(mut self, direction: Vec2) -> Self {
        self.ball_direction = direction;
        self
    }

    pub fn ball_owned_by_us(mut self, index: usize) -> Self {
        self.owner = Some((TeamSide::Ours, index));
        self
    }

    pub fn ball_owned_by_them(mut self, index: usize) -> Self {
        self.owner = Some((TeamSide::Theirs, index));
        self
    }

    pub fn ball_loose(mut self) -> Self {
        self.owner = None;
        self
    }

    pub fn phase(mut self, phase: GamePhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn sticky(mut self, index: usize, sticky: StickyActions) -> Self {
        self.sticky[index] = sticky;
        self
    }

    pub fn score(mut self, ours: i32, theirs: i32) -> Self {
        self.score = (ours, theirs);
        self
    }

    pub fn steps_left(mut self, steps: i64) -> Self {
        self.steps_left = steps;
        self
    }

    fn resolved_ball_position(&self) -> Vec2 {
        if let Some(pos) = self.ball_pos {
            return pos;
        }
        match self.owner {
            Some((TeamSide::Ours, i)) => self.teammates[i].position,
            Some((TeamSide::Theirs, i)) => self.opponents[i].position,
            None => Vec2::ZERO,
        }
    }

    pub fn build(self) -> Snapshot {
        Snapshot {
            ball: BallSnap {
                position: self.resolved_ball_position(),
                height: 0.0,
                direction: self.ball_direction,
                owner: self.owner,
            },
            teammates: self.teammates,
            opponents: self.opponents,
            phase: self.phase,
            sticky: self.sticky,
            score: self.score,
            steps_left: self.steps_left,
        }
    }

    /// Same scenario as a raw simulation frame
    pub fn to_observation(&self) -> ObservationFrame {
        let ball = self.resolved_ball_position();
        let (owned_team, owned_player) = match self.owner {
            Some((TeamSide::Ours, i)) => (0, i as i64),
            Some((TeamSide::Theirs, i)) => (1, i as i64),
            None => (-1, -1),
        };
        ObservationFrame {
            ball: [ball.x, ball.y, 0.0],
            ball_direction: [self.ball_direction.x, self.ball_direction.y, 0.0],
            ball_owned_team: owned_team,
            ball_owned_player: owned_player,
            left_team: self.teammates.iter().map(|p| [p.position.x, p.position.y]).collect(),
            left_team_direction: self.teammates.iter().map(|p| [p.velocity.x, p.velocity.y]).collect(),
            left_team_roles: self.teammates.iter().map(|p| p.role.index() as i64).collect(),
            left_team_tired_factor: self.teammates.iter().map(|p| p.fatigue).collect(),
            left_team_active: self.teammates.iter().map(|p| p.active).collect(),
            right_team: self.opponents.iter().map(|p| [p.position.x, p.position.y]).collect(),
            right_team_direction: self.opponents.iter().map(|p| [p.velocity.x, p.velocity.y]).collect(),
            right_team_roles: self.opponents.iter().map(|p| p.role.index() as i64).collect(),
            right_team_tired_factor: self.opponents.iter().map(|p| p.fatigue).collect(),
            right_team_active: self.opponents.iter().map(|p| p.active).collect(),
            game_mode: self.phase as i64,
            sticky_actions: self
                .sticky
                .iter()
                .map(|s| (0..sticky::COUNT).map(|slot| u8::from(s.is_set(slot))).collect())
                .collect(),
            score: [self.score.0, self.score.1],
            steps_left: self.steps_left,
        }
    }
}
