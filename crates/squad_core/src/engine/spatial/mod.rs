//! # Spatial Tactics Library
//!
//! Read-only queries over a `Snapshot`: pass lanes, open space, target
//! positions, lines and shot geometry. Every function is total and free of
//! side effects; degenerate inputs produce `None`, `false` or a conservative
//! value.
//!
//! ## Modules
//! - `passing`: best / safest / keeper pass targets, own-goal guard
//! - `space`: dribble cone, escape probes, crowding
//! - `positioning`: role-conditioned defensive spots, group proximity
//! - `lines`: offside line, back-line gaps
//! - `shooting`: feasibility, subtended angle, corridor blockers

pub mod lines;
pub mod passing;
pub mod positioning;
pub mod shooting;
pub mod space;

pub use crate::engine::geometry::{direction_to_heading, distance, is_path_clear, nearest};
pub use lines::{defensive_gap, is_offside, offside_line_x};
pub use passing::{
    best_pass_target, best_pass_with_score, keeper_pass_target, pass_score, safest_pass_target,
    violates_own_goal_guard,
};
pub use positioning::{defensive_target_position, keeper_position};
pub use shooting::{shot_angle, shot_blockers, shot_feasibility};
pub use space::check_dribble_space;
