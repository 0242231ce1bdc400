//! Events emitted by the session worker for front-ends to observe.
//!
//! Consumers subscribe to [`GameEvent`] to react to state changes without
//! blocking the worker loop; they re-query the session snapshot for the
//! actual data.
use game_core::{Position, UnitId};

/// Events emitted during a session.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Engine state was replaced wholesale from freshly fetched accounts.
    StateRefreshed,
    /// The selected unit (or none) changed; drives the info-panel display.
    SelectionChanged { selected: Option<UnitId> },
    /// A Village tile was clicked; opens the construction menu.
    VillageClicked { position: Position },
    /// A move intent was accepted by the external program.
    MoveSubmitted { unit: UnitId, destination: Position },
    /// The external program rejected a move; local state is unchanged.
    MoveRejected {
        unit: UnitId,
        destination: Position,
        reason: String,
    },
    /// An end-turn submission confirmed; `turn` is the new turn counter.
    TurnEnded { turn: u32 },
    /// A fetch or submission failed outside the move path.
    ProgramFailed { context: String },
}
