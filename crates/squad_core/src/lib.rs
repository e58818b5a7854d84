//! # squad_core - Tactical Decision Engine for Controlled Football Agents
//!
//! Turns one observation of the match into one discrete action for each of
//! the eleven agents we control, every tick.
//!
//! ## Features
//! - Deterministic decisions (same snapshot + history = same actions)
//! - Role handlers for keeper, defenders, midfielders and forward
//! - Scripted set pieces for every restart
//! - Tunable tactics presets via YAML / JSON
//! - Optional rayon fan-out over agents

// Pitch geometry reads better with explicit index loops
#![allow(clippy::needless_range_loop)]

pub mod engine;
pub mod error;

pub use engine::{Action, DecisionEngine, ObservationFrame, Snapshot, TacticsConfig};
pub use error::{ConfigError, Result, SnapshotError};
