//! # Tactical Decision Engine
//!
//! Per-tick pipeline: observation → validated snapshot → phase dispatch →
//! role handler / set piece → legality → sticky reconciliation → action.
//!
//! ## Design Principles
//! - Deterministic: identical snapshot and history give identical actions
//! - Pure helpers: spatial queries and evaluators never mutate state
//! - Only `DecisionEngine` owns state (per-agent continuity)

pub mod action;
pub mod config;
pub mod constants;
pub mod continuity;
pub mod decision_engine;
pub mod evaluator;
pub mod geometry;
pub mod phase;
pub mod roles;
pub mod scenario_builder;
pub mod snapshot;
pub mod spatial;
pub mod sticky;
pub mod types;

pub use action::Action;
pub use config::TacticsConfig;
pub use continuity::ContinuityState;
pub use decision_engine::{AgentReport, DecisionEngine, TickReport};
pub use evaluator::{ActionCandidate, Decision, DecisionPath};
pub use snapshot::{BallSnap, ObservationFrame, PlayerSnap, Snapshot};
pub use sticky::StickyActions;
pub use types::{GamePhase, Heading, PlayerRole, Possession, Restart, RoleGroup, TeamSide, Vec2};
