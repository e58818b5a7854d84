//! Sticky actions bitset
//!
//! Continuous actions the simulation reports as already in progress for an
//! agent: the 8 movement headings, sprint and dribble.

use serde::{Deserialize, Serialize};

use super::constants::sticky;
use super::types::Heading;

/// Per-agent sticky state, one bit per slot in `constants::sticky`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickyActions(u16);

impl StickyActions {
    pub const NONE: StickyActions = StickyActions(0);

    /// Build from the simulation's 0/1 vector. Extra slots are ignored.
    pub fn from_flags<T: Copy + Into<f64>>(flags: &[T]) -> Self {
        let mut bits = 0u16;
        for (slot, flag) in flags.iter().take(sticky::COUNT).enumerate() {
            if (*flag).into() != 0.0 {
                bits |= 1 << slot;
            }
        }
        StickyActions(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn is_set(self, slot: usize) -> bool {
        slot < sticky::COUNT && self.0 & (1 << slot) != 0
    }

    pub fn with(self, slot: usize) -> Self {
        if slot < sticky::COUNT {
            StickyActions(self.0 | (1 << slot))
        } else {
            self
        }
    }

    pub fn heading_active(self, heading: Heading) -> bool {
        self.is_set(heading.sticky_slot())
    }

    /// First movement heading in progress, in slot order
    pub fn current_heading(self) -> Option<Heading> {
        Heading::ALL.into_iter().find(|h| self.heading_active(*h))
    }

    pub fn sprinting(self) -> bool {
        self.is_set(sticky::SPRINT)
    }

    pub fn dribbling(self) -> bool {
        self.is_set(sticky::DRIBBLE)
    }

    pub fn with_heading(self, heading: Heading) -> Self {
        self.with(heading.sticky_slot())
    }

    pub fn with_sprint(self) -> Self {
        self.with(sticky::SPRINT)
    }

    pub fn with_dribble(self) -> Self {
        self.with(sticky::DRIBBLE)
    }
}
