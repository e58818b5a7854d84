//! Pitch and wire constants
//!
//! Normalized pitch coordinates as reported by the simulation:
//! - x: [-1, 1] (our goal line → attacked goal line)
//! - y: [-0.42, 0.42] (top touchline → bottom touchline)

// ============================================================
// Pitch geometry
// ============================================================
pub mod field {
    /// Left goal line (our goal)
    pub const LEFT_BOUNDARY: f32 = -1.0;
    /// Right goal line (attacked goal)
    pub const RIGHT_BOUNDARY: f32 = 1.0;
    /// Top touchline
    pub const TOP_BOUNDARY: f32 = -0.42;
    /// Bottom touchline
    pub const BOTTOM_BOUNDARY: f32 = 0.42;

    pub const CENTER_X: f32 = 0.0;
    pub const CENTER_Y: f32 = 0.0;

    /// Depth of the penalty area measured from the goal line
    pub const PENALTY_AREA_DEPTH: f32 = 0.165;
    /// Half width of the penalty area
    pub const PENALTY_AREA_HALF_WIDTH: f32 = 0.2;
}

pub mod goal {
    use crate::engine::types::Vec2;

    /// Our goal (defended)
    pub const OWN_X: f32 = -1.0;
    /// Opponent goal (attacked)
    pub const OPPONENT_X: f32 = 1.0;
    /// Top post y
    pub const TOP_POST_Y: f32 = -0.044;
    /// Bottom post y
    pub const BOTTOM_POST_Y: f32 = 0.044;

    pub const OWN_CENTER: Vec2 = Vec2 { x: OWN_X, y: 0.0 };
    pub const OPPONENT_CENTER: Vec2 = Vec2 { x: OPPONENT_X, y: 0.0 };
}

// ============================================================
// Team composition
// ============================================================
pub mod team {
    /// Controlled agents per tick
    pub const SIZE: usize = 11;
    /// Number of role ids on the wire
    pub const ROLE_COUNT: usize = 10;
}

// ============================================================
// Sticky action slots (simulation-reported bitset order)
// ============================================================
pub mod sticky {
    pub const LEFT: usize = 0;
    pub const TOP_LEFT: usize = 1;
    pub const TOP: usize = 2;
    pub const TOP_RIGHT: usize = 3;
    pub const RIGHT: usize = 4;
    pub const BOTTOM_RIGHT: usize = 5;
    pub const BOTTOM: usize = 6;
    pub const BOTTOM_LEFT: usize = 7;
    pub const SPRINT: usize = 8;
    pub const DRIBBLE: usize = 9;

    /// Total slots in the bitset
    pub const COUNT: usize = 10;
}

// ============================================================
// Continuity
// ============================================================
pub mod history {
    /// Maximum actions retained per agent (oldest evicted first)
    pub const CAPACITY: usize = 10;
}
