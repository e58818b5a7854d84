//! Role profiles
//!
//! Per-role multipliers and thresholds consumed by the utility evaluator and
//! the off-ball movement helpers. One entry per wire role id.

use serde::{Deserialize, Serialize};

use crate::engine::types::PlayerRole;

/// Tunables for a single role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    /// Scales the shoot utility (0 disables shooting)
    pub shot_multiplier: f32,
    /// Scales the pass utility
    pub pass_multiplier: f32,
    /// Value of this role as a pass receiver
    pub receiver_value: f32,
    /// Added to the dribble utility
    pub dribble_bias: f32,
    /// Minimum winning utility required to commit to shoot/pass/dribble
    pub commit_threshold: f32,
    /// Targets farther than this trigger a sprint
    pub sprint_distance: f32,
    /// Press the ball carrier when closer than pressure_distance * this
    pub press_trigger_scale: f32,
    /// Carrier releases the ball at once when an opponent is this close
    pub tight_pressure_distance: f32,
}

/// Role-indexed profile table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleProfiles {
    pub goalkeeper: RoleProfile,
    pub centre_back: RoleProfile,
    pub full_back: RoleProfile,
    pub defence_mid: RoleProfile,
    pub central_mid: RoleProfile,
    pub wide_mid: RoleProfile,
    pub attack_mid: RoleProfile,
    pub forward: RoleProfile,
}

impl RoleProfiles {
    pub fn get(&self, role: PlayerRole) -> &RoleProfile {
        match role {
            PlayerRole::Goalkeeper => &self.goalkeeper,
            PlayerRole::CentreBack => &self.centre_back,
            PlayerRole::LeftBack | PlayerRole::RightBack => &self.full_back,
            PlayerRole::DefenceMid => &self.defence_mid,
            PlayerRole::CentralMid => &self.central_mid,
            PlayerRole::LeftMid | PlayerRole::RightMid => &self.wide_mid,
            PlayerRole::AttackMid => &self.attack_mid,
            PlayerRole::CentralForward => &self.forward,
        }
    }

    pub fn get_mut(&mut self, role: PlayerRole) -> &mut RoleProfile {
        match role {
            PlayerRole::Goalkeeper => &mut self.goalkeeper,
            PlayerRole::CentreBack => &mut self.centre_back,
            PlayerRole::LeftBack | PlayerRole::RightBack => &mut self.full_back,
            PlayerRole::DefenceMid => &mut self.defence_mid,
            PlayerRole::CentralMid => &mut self.central_mid,
            PlayerRole::LeftMid | PlayerRole::RightMid => &mut self.wide_mid,
            PlayerRole::AttackMid => &mut self.attack_mid,
            PlayerRole::CentralForward => &mut self.forward,
        }
    }

    /// Every distinct profile, for validation
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &RoleProfile)> {
        [
            ("goalkeeper", &self.goalkeeper),
            ("centre_back", &self.centre_back),
            ("full_back", &self.full_back),
            ("defence_mid", &self.defence_mid),
            ("central_mid", &self.central_mid),
            ("wide_mid", &self.wide_mid),
            ("attack_mid", &self.attack_mid),
            ("forward", &self.forward),
        ]
        .into_iter()
    }
}

impl Default for RoleProfiles {
    fn default() -> Self {
        let defender = RoleProfile {
            shot_multiplier: 0.1,
            pass_multiplier: 1.1,
            receiver_value: 0.3,
            dribble_bias: 0.0,
            commit_threshold: 0.25,
            sprint_distance: 0.1,
            press_trigger_scale: 2.0,
            tight_pressure_distance: 0.04,
        };
        let midfielder = RoleProfile {
            shot_multiplier: 0.8,
            pass_multiplier: 1.0,
            receiver_value: 0.5,
            dribble_bias: 0.0,
            commit_threshold: 0.3,
            sprint_distance: 0.1,
            press_trigger_scale: 1.5,
            tight_pressure_distance: 0.035,
        };

        Self {
            goalkeeper: RoleProfile {
                shot_multiplier: 0.0,
                pass_multiplier: 1.1,
                receiver_value: 0.0,
                dribble_bias: -1.0,
                commit_threshold: 0.2,
                sprint_distance: 0.08,
                press_trigger_scale: 0.0,
                tight_pressure_distance: 0.045,
            },
            centre_back: RoleProfile {
                dribble_bias: -0.25,
                ..defender
            },
            full_back: defender,
            defence_mid: RoleProfile {
                dribble_bias: -0.15,
                ..midfielder
            },
            central_mid: midfielder,
            wide_mid: RoleProfile {
                receiver_value: 0.6,
                dribble_bias: 0.1,
                ..midfielder
            },
            attack_mid: RoleProfile {
                shot_multiplier: 1.0,
                receiver_value: 0.8,
                dribble_bias: 0.15,
                ..midfielder
            },
            forward: RoleProfile {
                shot_multiplier: 1.3,
                pass_multiplier: 0.8,
                receiver_value: 1.0,
                dribble_bias: 0.1,
                commit_threshold: 0.35,
                sprint_distance: 0.1,
                press_trigger_scale: 1.0,
                tight_pressure_distance: 0.035,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeper_never_shoots_or_dribbles() {
        let profiles = RoleProfiles::default();
        let gk = profiles.get(PlayerRole::Goalkeeper);
        assert_eq!(gk.shot_multiplier, 0.0);
        assert!(gk.dribble_bias <= -1.0);
    }

    #[test]
    fn test_commit_thresholds_by_group() {
        let p = RoleProfiles::default();
        assert_eq!(p.get(PlayerRole::CentralForward).commit_threshold, 0.35);
        assert_eq!(p.get(PlayerRole::LeftMid).commit_threshold, 0.3);
        assert_eq!(p.get(PlayerRole::RightBack).commit_threshold, 0.25);
        assert_eq!(p.get(PlayerRole::Goalkeeper).commit_threshold, 0.2);
    }

    #[test]
    fn test_back_line_releases_earliest() {
        let p = RoleProfiles::default();
        let gk = p.get(PlayerRole::Goalkeeper).tight_pressure_distance;
        let cb = p.get(PlayerRole::CentreBack).tight_pressure_distance;
        let cm = p.get(PlayerRole::CentralMid).tight_pressure_distance;
        let cf = p.get(PlayerRole::CentralForward).tight_pressure_distance;
        assert!(gk > cb && cb > cm);
        assert_eq!(cm, cf);
    }

    #[test]
    fn test_flank_roles_share_a_profile() {
        let mut p = RoleProfiles::default();
        p.get_mut(PlayerRole::LeftMid).dribble_bias = 0.4;
        assert_eq!(p.get(PlayerRole::RightMid).dribble_bias, 0.4);
        assert_eq!(p.iter().count(), 8);
    }
}
