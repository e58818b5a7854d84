//! Action continuity layer
//!
//! Two passes over the desired action before it is emitted:
//! 1. **Legality**: ball actions need possession, tackles need its absence.
//! 2. **Reconciliation** against the sticky state: re-emitting an action
//!    whose sticky effect is already active becomes IDLE.
//!
//! Each agent owns a `ContinuityState` with the last emitted action and a
//! short FIFO history for diagnostics.

use std::collections::VecDeque;

use crate::engine::action::Action;
use crate::engine::constants::history;
use crate::engine::snapshot::Snapshot;
use crate::engine::sticky::StickyActions;

/// Per-agent memory across ticks
#[derive(Debug, Clone, Default)]
pub struct ContinuityState {
    last_action: Option<Action>,
    history: VecDeque<Action>,
}

impl ContinuityState {
    pub fn new() -> Self {
        Self {
            last_action: None,
            history: VecDeque::with_capacity(history::CAPACITY),
        }
    }

    /// Append an emitted action, dropping the oldest beyond capacity
    pub fn record(&mut self, action: Action) {
        if self.history.len() == history::CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(action);
        self.last_action = Some(action);
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Oldest first
    pub fn history(&self) -> impl Iterator<Item = Action> + '_ {
        self.history.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.last_action = None;
        self.history.clear();
    }
}

/// Downgrade actions the agent cannot legally perform to IDLE
pub fn validate_for_possession(snapshot: &Snapshot, agent: usize, action: Action) -> Action {
    let owns = snapshot.owns_ball(agent);
    if action.requires_possession() && !owns {
        log::debug!("agent {} cannot {:?} without the ball", agent, action);
        return Action::Idle;
    }
    if action.is_tackle() && owns {
        log::debug!("agent {} cannot tackle while holding the ball", agent);
        return Action::Idle;
    }
    action
}

/// Suppress actions whose sticky effect is already active
pub fn reconcile(sticky: StickyActions, action: Action) -> Action {
    match action {
        Action::Sprint if sticky.sprinting() => Action::Idle,
        Action::Dribble if sticky.dribbling() => Action::Idle,
        _ => match action.heading() {
            Some(heading) if sticky.heading_active(heading) => Action::Idle,
            _ => action,
        },
    }
}
