//! Discrete action set sent to the simulation.
//!
//! Wire ids are fixed: IDLE (0) through RELEASE_DRIBBLE (18).

use serde::{Deserialize, Serialize};

use super::types::Heading;

/// One discrete action per agent per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    #[default]
    Idle = 0,
    Left = 1,
    TopLeft = 2,
    Top = 3,
    TopRight = 4,
    Right = 5,
    BottomRight = 6,
    Bottom = 7,
    BottomLeft = 8,
    LongPass = 9,
    HighPass = 10,
    ShortPass = 11,
    Shot = 12,
    Sprint = 13,
    ReleaseDirection = 14,
    ReleaseSprint = 15,
    Sliding = 16,
    Dribble = 17,
    ReleaseDribble = 18,
}

impl Action {
    /// Number of actions in the set
    pub const COUNT: usize = 19;

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Action::Idle,
            1 => Action::Left,
            2 => Action::TopLeft,
            3 => Action::Top,
            4 => Action::TopRight,
            5 => Action::Right,
            6 => Action::BottomRight,
            7 => Action::Bottom,
            8 => Action::BottomLeft,
            9 => Action::LongPass,
            10 => Action::HighPass,
            11 => Action::ShortPass,
            12 => Action::Shot,
            13 => Action::Sprint,
            14 => Action::ReleaseDirection,
            15 => Action::ReleaseSprint,
            16 => Action::Sliding,
            17 => Action::Dribble,
            18 => Action::ReleaseDribble,
            _ => return None,
        })
    }

    /// Movement action for a heading
    pub fn from_heading(heading: Heading) -> Self {
        match heading {
            Heading::Left => Action::Left,
            Heading::TopLeft => Action::TopLeft,
            Heading::Top => Action::Top,
            Heading::TopRight => Action::TopRight,
            Heading::Right => Action::Right,
            Heading::BottomRight => Action::BottomRight,
            Heading::Bottom => Action::Bottom,
            Heading::BottomLeft => Action::BottomLeft,
        }
    }

    /// Heading carried by a movement action
    pub fn heading(self) -> Option<Heading> {
        Some(match self {
            Action::Left => Heading::Left,
            Action::TopLeft => Heading::TopLeft,
            Action::Top => Heading::Top,
            Action::TopRight => Heading::TopRight,
            Action::Right => Heading::Right,
            Action::BottomRight => Heading::BottomRight,
            Action::Bottom => Heading::Bottom,
            Action::BottomLeft => Heading::BottomLeft,
            _ => return None,
        })
    }

    pub fn is_movement(self) -> bool {
        self.heading().is_some()
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Action::LongPass | Action::HighPass | Action::ShortPass)
    }

    /// Actions the simulation only honours for the ball owner
    pub fn requires_possession(self) -> bool {
        matches!(
            self,
            Action::Shot
                | Action::LongPass
                | Action::HighPass
                | Action::ShortPass
                | Action::Dribble
                | Action::ReleaseDribble
        )
    }

    /// Tackling actions, never issued by the ball owner
    pub fn is_tackle(self) -> bool {
        matches!(self, Action::Sliding)
    }
}

impl From<Heading> for Action {
    fn from(heading: Heading) -> Self {
        Action::from_heading(heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_cover_the_whole_set() {
        for id in 0..Action::COUNT as u8 {
            let action = Action::from_id(id).unwrap();
            assert_eq!(action.id(), id);
        }
        assert_eq!(Action::from_id(Action::COUNT as u8), None);
    }

    #[test]
    fn test_heading_mapping_is_consistent() {
        for heading in Heading::ALL {
            let action = Action::from_heading(heading);
            assert!(action.is_movement());
            assert_eq!(action.heading(), Some(heading));
        }
        assert_eq!(Action::Sprint.heading(), None);
    }

    #[test]
    fn test_possession_classes() {
        assert!(Action::Shot.requires_possession());
        assert!(Action::HighPass.requires_possession());
        assert!(Action::ReleaseDribble.requires_possession());
        assert!(!Action::Sprint.requires_possession());
        assert!(!Action::Sliding.requires_possession());
        assert!(Action::Sliding.is_tackle());
        assert!(Action::ShortPass.is_pass());
    }
}
