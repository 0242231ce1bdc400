//! Utilities for reacting to session events inside UI layers.
use runtime::GameEvent;

use crate::message::MessageLog;

/// What a consumed event requires of the UI.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
    /// The rendered snapshot is stale and must be re-queried.
    pub snapshot_stale: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            snapshot_stale: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            snapshot_stale: false,
        }
    }

    pub const fn resync() -> Self {
        Self {
            requires_redraw: true,
            snapshot_stale: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            snapshot_stale: self.snapshot_stale || other.snapshot_stale,
        }
    }
}

/// Frontend-side event sink translating [`GameEvent`]s into UI effects.
pub trait EventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}
