//! Core value types shared by every decision layer.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

// ============================================================================
// Vec2
// ============================================================================

/// 2D point / vector in normalized pitch coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// Attacking direction (toward the opponent goal)
    pub const FORWARD: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector, or `None` for a (near) zero vector
    pub fn try_normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > 1e-6 && len.is_finite() {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// 90° counter-clockwise rotation (in screen space, y down)
    pub fn perp_left(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// 90° clockwise rotation (in screen space, y down)
    pub fn perp_right(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(v: [f32; 2]) -> Self {
        Vec2::new(v[0], v[1])
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from(v: (f32, f32)) -> Self {
        Vec2::new(v.0, v.1)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

// ============================================================================
// Heading
// ============================================================================

/// One of the 8 discrete movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Left,
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
}

impl Heading {
    pub const ALL: [Heading; 8] = [
        Heading::Left,
        Heading::TopLeft,
        Heading::Top,
        Heading::TopRight,
        Heading::Right,
        Heading::BottomRight,
        Heading::Bottom,
        Heading::BottomLeft,
    ];

    /// Sticky bitset slot reporting this heading as in progress
    pub fn sticky_slot(self) -> usize {
        use crate::engine::constants::sticky;
        match self {
            Heading::Left => sticky::LEFT,
            Heading::TopLeft => sticky::TOP_LEFT,
            Heading::Top => sticky::TOP,
            Heading::TopRight => sticky::TOP_RIGHT,
            Heading::Right => sticky::RIGHT,
            Heading::BottomRight => sticky::BOTTOM_RIGHT,
            Heading::Bottom => sticky::BOTTOM,
            Heading::BottomLeft => sticky::BOTTOM_LEFT,
        }
    }

    /// Unit vector for the heading (y grows toward the bottom touchline)
    pub fn unit_vector(self) -> Vec2 {
        const D: f32 = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Heading::Left => Vec2::new(-1.0, 0.0),
            Heading::TopLeft => Vec2::new(-D, -D),
            Heading::Top => Vec2::new(0.0, -1.0),
            Heading::TopRight => Vec2::new(D, -D),
            Heading::Right => Vec2::new(1.0, 0.0),
            Heading::BottomRight => Vec2::new(D, D),
            Heading::Bottom => Vec2::new(0.0, 1.0),
            Heading::BottomLeft => Vec2::new(-D, D),
        }
    }
}

// ============================================================================
// Roles
// ============================================================================

/// Tactical role reported per player (wire ids 0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Goalkeeper = 0,
    CentreBack = 1,
    LeftBack = 2,
    RightBack = 3,
    DefenceMid = 4,
    CentralMid = 5,
    LeftMid = 6,
    RightMid = 7,
    AttackMid = 8,
    CentralForward = 9,
}

impl PlayerRole {
    /// Role applied when the wire carries an id outside the enum
    pub const FALLBACK: PlayerRole = PlayerRole::CentralMid;

    pub fn from_id(id: i64) -> Option<Self> {
        Some(match id {
            0 => PlayerRole::Goalkeeper,
            1 => PlayerRole::CentreBack,
            2 => PlayerRole::LeftBack,
            3 => PlayerRole::RightBack,
            4 => PlayerRole::DefenceMid,
            5 => PlayerRole::CentralMid,
            6 => PlayerRole::LeftMid,
            7 => PlayerRole::RightMid,
            8 => PlayerRole::AttackMid,
            9 => PlayerRole::CentralForward,
            _ => return None,
        })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn group(self) -> RoleGroup {
        match self {
            PlayerRole::Goalkeeper => RoleGroup::Goalkeeper,
            PlayerRole::CentreBack | PlayerRole::LeftBack | PlayerRole::RightBack => {
                RoleGroup::Defender
            }
            PlayerRole::DefenceMid
            | PlayerRole::CentralMid
            | PlayerRole::LeftMid
            | PlayerRole::RightMid
            | PlayerRole::AttackMid => RoleGroup::Midfielder,
            PlayerRole::CentralForward => RoleGroup::Forward,
        }
    }

    pub fn is_fullback(self) -> bool {
        matches!(self, PlayerRole::LeftBack | PlayerRole::RightBack)
    }

    pub fn is_wide_mid(self) -> bool {
        matches!(self, PlayerRole::LeftMid | PlayerRole::RightMid)
    }

    /// -1 for left-flank roles, +1 for right-flank roles, 0 for central roles
    pub fn flank_sign(self) -> f32 {
        match self {
            PlayerRole::LeftBack | PlayerRole::LeftMid => -1.0,
            PlayerRole::RightBack | PlayerRole::RightMid => 1.0,
            _ => 0.0,
        }
    }
}

/// Coarse role families used for dispatch and shared thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl RoleGroup {
    /// Keepers and backs pass under the own-goal guard
    pub fn guards_own_goal(self) -> bool {
        matches!(self, RoleGroup::Goalkeeper | RoleGroup::Defender)
    }
}

// ============================================================================
// Game phase
// ============================================================================

/// Game mode reported by the simulation (wire ids 0-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Normal,
    KickOff,
    GoalKick,
    FreeKick,
    Corner,
    ThrowIn,
    Penalty,
}

impl GamePhase {
    pub fn from_id(id: i64) -> Option<Self> {
        Some(match id {
            0 => GamePhase::Normal,
            1 => GamePhase::KickOff,
            2 => GamePhase::GoalKick,
            3 => GamePhase::FreeKick,
            4 => GamePhase::Corner,
            5 => GamePhase::ThrowIn,
            6 => GamePhase::Penalty,
            _ => return None,
        })
    }

    /// The restart being taken, `None` in open play
    pub fn restart(self) -> Option<Restart> {
        Some(match self {
            GamePhase::Normal => return None,
            GamePhase::KickOff => Restart::KickOff,
            GamePhase::GoalKick => Restart::GoalKick,
            GamePhase::FreeKick => Restart::FreeKick,
            GamePhase::Corner => Restart::Corner,
            GamePhase::ThrowIn => Restart::ThrowIn,
            GamePhase::Penalty => Restart::Penalty,
        })
    }
}

/// Dead-ball phases handled by the set-piece scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Restart {
    KickOff,
    GoalKick,
    FreeKick,
    Corner,
    ThrowIn,
    Penalty,
}

// ============================================================================
// Possession
// ============================================================================

/// Team relative to the controlled side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Ours,
    Theirs,
}

/// Who currently controls the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Possession {
    Ours,
    Theirs,
    Loose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_round_trip_and_fallback() {
        for id in 0..10 {
            let role = PlayerRole::from_id(id).unwrap();
            assert_eq!(role.index() as i64, id);
        }
        assert_eq!(PlayerRole::from_id(10), None);
        assert_eq!(PlayerRole::from_id(-1), None);
        assert_eq!(PlayerRole::FALLBACK, PlayerRole::CentralMid);
    }

    #[test]
    fn test_role_groups() {
        assert_eq!(PlayerRole::Goalkeeper.group(), RoleGroup::Goalkeeper);
        assert_eq!(PlayerRole::RightBack.group(), RoleGroup::Defender);
        assert_eq!(PlayerRole::DefenceMid.group(), RoleGroup::Midfielder);
        assert_eq!(PlayerRole::CentralForward.group(), RoleGroup::Forward);
        assert!(RoleGroup::Defender.guards_own_goal());
        assert!(!RoleGroup::Midfielder.guards_own_goal());
    }

    #[test]
    fn test_game_phase_ids() {
        assert_eq!(GamePhase::from_id(0), Some(GamePhase::Normal));
        assert_eq!(GamePhase::from_id(6), Some(GamePhase::Penalty));
        assert_eq!(GamePhase::from_id(7), None);
        assert_eq!(GamePhase::Corner.restart(), Some(Restart::Corner));
        assert_eq!(GamePhase::Normal.restart(), None);
    }

    #[test]
    fn test_heading_vectors_are_unit_length() {
        for heading in Heading::ALL {
            assert!((heading.unit_vector().length() - 1.0).abs() < 1e-5);
        }
        assert_eq!(Heading::Bottom.unit_vector(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_try_normalized_rejects_zero() {
        assert!(Vec2::ZERO.try_normalized().is_none());
        let unit = Vec2::new(3.0, 4.0).try_normalized().unwrap();
        assert!((unit.x - 0.6).abs() < 1e-6);
    }
}
