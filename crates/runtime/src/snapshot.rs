//! Read models handed to frontends.
use client_blockchain_core::ResourceBalances;
use game_core::{MapGrid, Unit, UnitId};

/// Explicit state machine for an outstanding submission.
///
/// While `Submitting`, the worker ignores further tile clicks and the UI is
/// expected to show a blocking wait indicator. There is no cancellation of an
/// in-flight submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed,
}

/// Point-in-time copy of everything a frontend renders.
///
/// Produced by the worker on request; replaced wholesale, never patched.
#[derive(Clone, Debug)]
pub struct SessionSnapshot {
    pub map: MapGrid,
    pub units: Vec<Unit>,
    pub selected: Option<UnitId>,
    pub resources: ResourceBalances,
    pub turn: u32,
    pub submission: SubmissionState,
}
