//! # Decision Engine
//!
//! Entry point for one tick: snapshot in, one action per controlled agent
//! out.
//!
//! ## Pipeline (per agent)
//! 1. Phase dispatcher picks the desired action (roles / set pieces)
//! 2. Legality: ball actions without possession and tackles with it → IDLE
//! 3. Continuity: actions whose sticky effect is already active → IDLE
//! 4. The emitted action is appended to the agent's history
//!
//! Agents never read each other's continuity state, so `decide_parallel`
//! fans the eleven agents out over rayon and yields the same actions as
//! `decide`.
//!
//! ## Usage
//!
//! ```rust
//! use squad_core::engine::action::Action;
//! use squad_core::engine::config::TacticsConfig;
//! use squad_core::engine::decision_engine::DecisionEngine;
//! use squad_core::engine::scenario_builder::ScenarioBuilder;
//! use squad_core::engine::types::Vec2;
//!
//! let mut engine = DecisionEngine::with_config(TacticsConfig::default());
//! let snapshot = ScenarioBuilder::new()
//!     .move_teammate(10, Vec2::new(0.9, 0.0))
//!     .ball_owned_by_us(10)
//!     .build();
//! let actions = engine.decide(&snapshot);
//! assert_eq!(actions[10], Action::Shot);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::action::Action;
use crate::engine::config::TacticsConfig;
use crate::engine::constants::team;
use crate::engine::continuity::{reconcile, validate_for_possession, ContinuityState};
use crate::engine::evaluator::{ActionCandidate, DecisionPath};
use crate::engine::phase;
use crate::engine::snapshot::{ObservationFrame, Snapshot};
use crate::error::Result;

/// What happened to one agent's action this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    /// Output of the phase dispatcher
    pub desired: Action,
    /// After the legality check
    pub validated: Action,
    /// After sticky reconciliation; this is what the simulation receives
    pub emitted: Action,
    pub path: DecisionPath,
    pub candidate: Option<ActionCandidate>,
}

/// Per-agent reports for one tick, indexed like the snapshot teammates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub agents: [AgentReport; team::SIZE],
}

impl TickReport {
    pub fn actions(&self) -> [Action; team::SIZE] {
        self.agents.map(|a| a.emitted)
    }
}

/// Owns the tuning and every agent's continuity state
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: TacticsConfig,
    continuity: [ContinuityState; team::SIZE],
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionEngine {
    /// Engine with the preset named by `SQUAD_TACTICS_PROFILE`
    pub fn new() -> Self {
        Self::with_config(TacticsConfig::from_env_or_default())
    }

    pub fn with_config(config: TacticsConfig) -> Self {
        Self {
            config,
            continuity: std::array::from_fn(|_| ContinuityState::new()),
        }
    }

    pub fn config(&self) -> &TacticsConfig {
        &self.config
    }

    /// One action per agent, computed sequentially
    pub fn decide(&mut self, snapshot: &Snapshot) -> [Action; team::SIZE] {
        self.decide_with_report(snapshot).actions()
    }

    /// Same as `decide`, keeping the intermediate actions and decision paths
    pub fn decide_with_report(&mut self, snapshot: &Snapshot) -> TickReport {
        debug!(phase = ?snapshot.phase, steps_left = snapshot.steps_left, "deciding tick");
        let Self { config, continuity } = self;
        TickReport {
            agents: std::array::from_fn(|agent| {
                step_agent(snapshot, agent, config, &mut continuity[agent])
            }),
        }
    }

    /// One action per agent, agents spread over the rayon pool
    pub fn decide_parallel(&mut self, snapshot: &Snapshot) -> [Action; team::SIZE] {
        debug!(phase = ?snapshot.phase, steps_left = snapshot.steps_left, "deciding tick (parallel)");
        let Self { config, continuity } = self;
        let config: &TacticsConfig = config;
        let emitted: Vec<Action> = continuity
            .par_iter_mut()
            .enumerate()
            .map(|(agent, state)| step_agent(snapshot, agent, config, state).emitted)
            .collect();
        std::array::from_fn(|agent| emitted[agent])
    }

    /// Validate a raw simulation frame, then decide
    pub fn decide_observation(&mut self, frame: &ObservationFrame) -> Result<[Action; team::SIZE]> {
        let snapshot = Snapshot::from_observation(frame)?;
        Ok(self.decide(&snapshot))
    }

    /// Forget every agent's history (new episode)
    pub fn reset(&mut self) {
        for state in &mut self.continuity {
            state.clear();
        }
        info!("decision engine reset");
    }

    /// Emitted actions of one agent, oldest first
    pub fn history(&self, agent: usize) -> Vec<Action> {
        self.continuity
            .get(agent)
            .map(|state| state.history().collect())
            .unwrap_or_default()
    }

    pub fn continuity(&self, agent: usize) -> Option<&ContinuityState> {
        self.continuity.get(agent)
    }
}

fn step_agent(
    snapshot: &Snapshot,
    agent: usize,
    config: &TacticsConfig,
    state: &mut ContinuityState,
) -> AgentReport {
    let decision = phase::decide(snapshot, agent, config);
    let validated = validate_for_possession(snapshot, agent, decision.action);
    let emitted = reconcile(snapshot.sticky_for(agent), validated);
    state.record(emitted);

    debug!(
        agent,
        desired = ?decision.action,
        emitted = ?emitted,
        path = ?decision.path,
        "agent decision"
    );

    AgentReport {
        desired: decision.action,
        validated,
        emitted,
        path: decision.path,
        candidate: decision.candidate,
    }
}
