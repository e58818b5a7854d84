//! Tick snapshot
//!
//! `ObservationFrame` mirrors the raw observation dictionary produced by the
//! simulation (field names kept as-is so it deserializes straight from a
//! dumped frame). `Snapshot` is the validated, strongly typed view every
//! decision layer reads. Conversion happens once per tick.
//!
//! ## Design Principles
//! - Validate at the boundary, never inside decision logic
//! - Fixed-size arrays for the two teams (11 each)
//! - Unknown role ids degrade to a fallback role instead of failing

use serde::{Deserialize, Serialize};

use super::constants::team;
use super::sticky::StickyActions;
use super::types::{GamePhase, PlayerRole, Possession, TeamSide, Vec2};
use crate::error::{Result, SnapshotError};

// ============================================================================
// Raw observation
// ============================================================================

/// Raw per-tick observation, one frame as the simulation reports it.
///
/// Optional per-player vectors may be empty, in which case defaults apply
/// (zero velocity, zero fatigue, active, no sticky actions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationFrame {
    /// Ball position `[x, y, z]`
    pub ball: [f32; 3],
    #[serde(default)]
    pub ball_direction: [f32; 3],
    /// -1 nobody, 0 our team, 1 opponents
    pub ball_owned_team: i64,
    #[serde(default = "no_owner")]
    pub ball_owned_player: i64,

    pub left_team: Vec<[f32; 2]>,
    #[serde(default)]
    pub left_team_direction: Vec<[f32; 2]>,
    pub left_team_roles: Vec<i64>,
    #[serde(default)]
    pub left_team_tired_factor: Vec<f32>,
    #[serde(default)]
    pub left_team_active: Vec<bool>,

    pub right_team: Vec<[f32; 2]>,
    #[serde(default)]
    pub right_team_direction: Vec<[f32; 2]>,
    #[serde(default)]
    pub right_team_roles: Vec<i64>,
    #[serde(default)]
    pub right_team_tired_factor: Vec<f32>,
    #[serde(default)]
    pub right_team_active: Vec<bool>,

    #[serde(default)]
    pub game_mode: i64,
    /// One 10-slot 0/1 vector per controlled agent
    #[serde(default)]
    pub sticky_actions: Vec<Vec<u8>>,
    #[serde(default)]
    pub score: [i32; 2],
    #[serde(default)]
    pub steps_left: i64,
}

fn no_owner() -> i64 {
    -1
}

// ============================================================================
// Validated snapshot
// ============================================================================

/// Ball state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallSnap {
    pub position: Vec2,
    pub height: f32,
    /// Per-tick displacement
    pub direction: Vec2,
    /// Owning team and player index within that team
    pub owner: Option<(TeamSide, usize)>,
}

/// One player on either team
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnap {
    pub position: Vec2,
    pub velocity: Vec2,
    pub role: PlayerRole,
    /// 0 = fresh, 1 = exhausted
    pub fatigue: f32,
    pub active: bool,
}

impl Default for PlayerSnap {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            role: PlayerRole::FALLBACK,
            fatigue: 0.0,
            active: true,
        }
    }
}

/// Immutable per-tick world view.
///
/// Serializable for diagnostics, but only built from a validated
/// `ObservationFrame` (or the scenario builder).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball: BallSnap,
    pub teammates: [PlayerSnap; team::SIZE],
    pub opponents: [PlayerSnap; team::SIZE],
    pub phase: GamePhase,
    /// Sticky state per controlled agent
    pub sticky: [StickyActions; team::SIZE],
    /// (ours, theirs)
    pub score: (i32, i32),
    pub steps_left: i64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            ball: BallSnap::default(),
            teammates: [PlayerSnap::default(); team::SIZE],
            opponents: [PlayerSnap::default(); team::SIZE],
            phase: GamePhase::Normal,
            sticky: [StickyActions::NONE; team::SIZE],
            score: (0, 0),
            steps_left: 0,
        }
    }
}

impl TryFrom<&ObservationFrame> for Snapshot {
    type Error = SnapshotError;

    fn try_from(frame: &ObservationFrame) -> Result<Self> {
        Self::from_observation(frame)
    }
}

impl Snapshot {
    /// Validate a raw frame and convert it to the typed snapshot
    pub fn from_observation(frame: &ObservationFrame) -> Result<Self> {
        check_team_size("left_team", frame.left_team.len())?;
        check_team_size("right_team", frame.right_team.len())?;

        check_len("left_team_roles", frame.left_team_roles.len(), false)?;
        check_len("right_team_roles", frame.right_team_roles.len(), true)?;
        check_len("left_team_direction", frame.left_team_direction.len(), true)?;
        check_len("right_team_direction", frame.right_team_direction.len(), true)?;
        check_len("left_team_tired_factor", frame.left_team_tired_factor.len(), true)?;
        check_len("right_team_tired_factor", frame.right_team_tired_factor.len(), true)?;
        check_len("left_team_active", frame.left_team_active.len(), true)?;
        check_len("right_team_active", frame.right_team_active.len(), true)?;
        check_len("sticky_actions", frame.sticky_actions.len(), true)?;

        check_finite("ball", frame.ball.iter().copied())?;
        check_finite("ball_direction", frame.ball_direction.iter().copied())?;

        let teammates = build_team(
            "left_team",
            &frame.left_team,
            &frame.left_team_direction,
            &frame.left_team_roles,
            &frame.left_team_tired_factor,
            &frame.left_team_active,
        )?;
        let opponents = build_team(
            "right_team",
            &frame.right_team,
            &frame.right_team_direction,
            &frame.right_team_roles,
            &frame.right_team_tired_factor,
            &frame.right_team_active,
        )?;

        let phase = GamePhase::from_id(frame.game_mode)
            .ok_or(SnapshotError::UnknownGameMode(frame.game_mode))?;

        let owner = match frame.ball_owned_team {
            -1 => None,
            0 | 1 => {
                let side = if frame.ball_owned_team == 0 {
                    TeamSide::Ours
                } else {
                    TeamSide::Theirs
                };
                let index = usize::try_from(frame.ball_owned_player)
                    .ok()
                    .filter(|i| *i < team::SIZE)
                    .ok_or(SnapshotError::OwnerOutOfRange {
                        index: frame.ball_owned_player,
                        team_size: team::SIZE,
                    })?;
                Some((side, index))
            }
            other => return Err(SnapshotError::InvalidOwnerTeam(other)),
        };

        let sticky = std::array::from_fn(|i| {
            frame
                .sticky_actions
                .get(i)
                .map(|flags| StickyActions::from_flags(flags.as_slice()))
                .unwrap_or_default()
        });

        Ok(Self {
            ball: BallSnap {
                position: Vec2::new(frame.ball[0], frame.ball[1]),
                height: frame.ball[2],
                direction: Vec2::new(frame.ball_direction[0], frame.ball_direction[1]),
                owner,
            },
            teammates,
            opponents,
            phase,
            sticky,
            score: (frame.score[0], frame.score[1]),
            steps_left: frame.steps_left,
        })
    }

    /// Parse a JSON-encoded frame and validate it
    pub fn from_json(text: &str) -> Result<Self> {
        let frame: ObservationFrame = serde_json::from_str(text)?;
        Self::from_observation(&frame)
    }

    pub fn possession(&self) -> Possession {
        match self.ball.owner {
            Some((TeamSide::Ours, _)) => Possession::Ours,
            Some((TeamSide::Theirs, _)) => Possession::Theirs,
            None => Possession::Loose,
        }
    }

    /// Index of our agent owning the ball, if any
    pub fn our_ball_owner(&self) -> Option<usize> {
        match self.ball.owner {
            Some((TeamSide::Ours, idx)) => Some(idx),
            _ => None,
        }
    }

    pub fn owns_ball(&self, agent: usize) -> bool {
        self.our_ball_owner() == Some(agent)
    }

    pub fn sticky_for(&self, agent: usize) -> StickyActions {
        self.sticky[agent]
    }

    /// Active teammates with their indices
    pub fn active_teammates(&self) -> impl Iterator<Item = (usize, &PlayerSnap)> {
        self.teammates.iter().enumerate().filter(|(_, p)| p.active)
    }

    /// Active opponents with their indices
    pub fn active_opponents(&self) -> impl Iterator<Item = (usize, &PlayerSnap)> {
        self.opponents.iter().enumerate().filter(|(_, p)| p.active)
    }

    /// Positions of all active opponents
    pub fn opponent_positions(&self) -> Vec<Vec2> {
        self.active_opponents().map(|(_, p)| p.position).collect()
    }

    /// Active outfield opponents (keeper excluded)
    pub fn opponent_outfield_positions(&self) -> Vec<Vec2> {
        self.active_opponents()
            .filter(|(_, p)| p.role != PlayerRole::Goalkeeper)
            .map(|(_, p)| p.position)
            .collect()
    }

    /// Distance from a point to the nearest active opponent (`f32::INFINITY` if none)
    pub fn nearest_opponent_distance(&self, point: Vec2) -> f32 {
        self.active_opponents()
            .map(|(_, p)| (p.position - point).length())
            .fold(f32::INFINITY, f32::min)
    }
}

fn check_team_size(team_name: &'static str, found: usize) -> Result<()> {
    if found == team::SIZE {
        Ok(())
    } else {
        Err(SnapshotError::InvalidTeamSize {
            team: team_name,
            expected: team::SIZE,
            found,
        })
    }
}

fn check_len(field: &'static str, found: usize, optional: bool) -> Result<()> {
    if found == team::SIZE || (optional && found == 0) {
        Ok(())
    } else {
        Err(SnapshotError::LengthMismatch {
            field,
            expected: team::SIZE,
            found,
        })
    }
}

fn check_finite(field: &'static str, values: impl Iterator<Item = f32>) -> Result<()> {
    for (index, value) in values.enumerate() {
        if !value.is_finite() {
            return Err(SnapshotError::NonFinite { field, index });
        }
    }
    Ok(())
}

fn build_team(
    field: &'static str,
    positions: &[[f32; 2]],
    directions: &[[f32; 2]],
    roles: &[i64],
    tired: &[f32],
    active: &[bool],
) -> Result<[PlayerSnap; team::SIZE]> {
    let mut players = [PlayerSnap::default(); team::SIZE];

    for (i, player) in players.iter_mut().enumerate() {
        let pos = positions[i];
        if !pos[0].is_finite() || !pos[1].is_finite() {
            return Err(SnapshotError::NonFinite { field, index: i });
        }
        let dir = directions.get(i).copied().unwrap_or([0.0, 0.0]);
        if !dir[0].is_finite() || !dir[1].is_finite() {
            return Err(SnapshotError::NonFinite { field, index: i });
        }
        let fatigue = tired.get(i).copied().unwrap_or(0.0);
        if !fatigue.is_finite() {
            return Err(SnapshotError::NonFinite { field, index: i });
        }

        // Opponent roles are optional; a missing table reads as all fallback
        let role = match roles.get(i) {
            Some(&id) => PlayerRole::from_id(id).unwrap_or_else(|| {
                log::warn!(
                    "{} player {} has unknown role id {}, using {:?}",
                    field,
                    i,
                    id,
                    PlayerRole::FALLBACK
                );
                PlayerRole::FALLBACK
            }),
            None => PlayerRole::FALLBACK,
        };

        *player = PlayerSnap {
            position: Vec2::new(pos[0], pos[1]),
            velocity: Vec2::new(dir[0], dir[1]),
            role,
            fatigue: fatigue.clamp(0.0, 1.0),
            active: active.get(i).copied().unwrap_or(true),
        };
    }

    Ok(players)
}
