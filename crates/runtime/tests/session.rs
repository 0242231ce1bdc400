//! End-to-end session tests driving the worker over the in-memory program.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;

use std::sync::atomic::{AtomicBool, Ordering};

use client_blockchain_core::{
    GameProgram, GameSnapshot, LocalGameProgram, PlayerSnapshot, ProgramError, TransactionId,
    TransportError,
};
use game_core::{Position, TILE_COUNT, UnitId};
use runtime::{GameEvent, Runtime, RuntimeConfig, RuntimeHandle, SubmissionState};

fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        map_seed: Some(7),
        ..RuntimeConfig::default()
    }
}

/// Spawn a runtime over `program` and return its handle plus an event feed.
fn spawn_session(
    program: Arc<dyn GameProgram>,
) -> (RuntimeHandle, broadcast::Receiver<GameEvent>) {
    let mut runtime = Runtime::new(test_config(), program);
    let handle = runtime.handle();
    let events = handle.subscribe();
    tokio::spawn(async move {
        if let Err(err) = runtime.run().await {
            panic!("runtime worker failed: {err}");
        }
    });
    (handle, events)
}

async fn next_event(events: &mut broadcast::Receiver<GameEvent>) -> GameEvent {
    tokio::time::timeout(std::time::Duration::from_secs(5), events.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

#[tokio::test]
async fn initial_sync_creates_and_loads_a_fresh_game() {
    let (handle, mut events) = spawn_session(Arc::new(LocalGameProgram::new()));

    assert!(matches!(
        next_event(&mut events).await,
        GameEvent::StateRefreshed
    ));

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.map.tiles().len(), TILE_COUNT);
    assert_eq!(snapshot.units.len(), 3);
    assert_eq!(snapshot.turn, 1);
    assert_eq!(snapshot.selected, None);
    assert_eq!(snapshot.submission, SubmissionState::Idle);
}

#[tokio::test]
async fn clicking_a_unit_selects_it_and_clicking_again_deselects() {
    let (handle, mut events) = spawn_session(Arc::new(LocalGameProgram::new()));
    next_event(&mut events).await; // initial StateRefreshed

    // Warrior starts at (2, 3).
    handle.click_tile(Position::new(2, 3)).await.unwrap();
    match next_event(&mut events).await {
        GameEvent::SelectionChanged { selected } => assert_eq!(selected, Some(UnitId(2))),
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(handle.snapshot().await.unwrap().selected, Some(UnitId(2)));

    handle.click_tile(Position::new(2, 3)).await.unwrap();
    match next_event(&mut events).await {
        GameEvent::SelectionChanged { selected } => assert_eq!(selected, None),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn confirmed_move_refreshes_state_and_clears_selection() {
    let program = Arc::new(LocalGameProgram::new());
    let (handle, mut events) = spawn_session(program.clone());
    next_event(&mut events).await;

    handle.click_tile(Position::new(2, 3)).await.unwrap();
    next_event(&mut events).await; // SelectionChanged

    handle.click_tile(Position::new(2, 5)).await.unwrap();
    match next_event(&mut events).await {
        GameEvent::MoveSubmitted { unit, destination } => {
            assert_eq!(unit, UnitId(2));
            assert_eq!(destination, Position::new(2, 5));
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(matches!(
        next_event(&mut events).await,
        GameEvent::StateRefreshed
    ));

    let snapshot = handle.snapshot().await.unwrap();
    let warrior = snapshot
        .units
        .iter()
        .find(|u| u.id == UnitId(2))
        .copied()
        .unwrap();
    assert_eq!(warrior.position, Position::new(2, 5));
    assert_eq!(warrior.movement_range, 0);
    // Selection is cleared by the wholesale roster replacement, not before.
    assert_eq!(snapshot.selected, None);
    assert_eq!(snapshot.submission, SubmissionState::Idle);

    // The program agrees with the client's view.
    let player = program.fetch_player().await.unwrap();
    let raw = player.units.iter().find(|u| u.unit_id == 2).unwrap();
    assert_eq!((raw.x, raw.y), (2, 5));
}

#[tokio::test]
async fn ending_the_turn_resets_budgets_and_accrues_resources() {
    let (handle, mut events) = spawn_session(Arc::new(LocalGameProgram::new()));
    next_event(&mut events).await;

    handle.end_turn().await.unwrap();
    match next_event(&mut events).await {
        GameEvent::TurnEnded { turn } => assert_eq!(turn, 2),
        other => panic!("unexpected event: {other:?}"),
    }
    next_event(&mut events).await; // StateRefreshed

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.turn, 2);
    assert!(snapshot.units.iter().all(|u| u.movement_range == 2));
    assert!(snapshot.resources.gold > 0);
}

#[tokio::test]
async fn village_click_raises_the_interaction_event() {
    // Pre-initialize with a Village at (1, 1) so the refresh-only path runs.
    let program = Arc::new(LocalGameProgram::new());
    let mut map = vec![1u8; TILE_COUNT];
    map[20 + 1] = 10;
    program.initialize_game(map).await.unwrap();

    let (handle, mut events) = spawn_session(program);
    next_event(&mut events).await;

    handle.click_tile(Position::new(1, 1)).await.unwrap();
    match next_event(&mut events).await {
        GameEvent::VillageClicked { position } => assert_eq!(position, Position::new(1, 1)),
        other => panic!("unexpected event: {other:?}"),
    }
    // No selection change: the tile is empty and nothing was selected.
    assert_eq!(handle.snapshot().await.unwrap().selected, None);
}

/// Delegates to the local program but rejects every move, standing in for an
/// authority that disagrees with the client's advisory validation.
struct RejectingProgram {
    inner: LocalGameProgram,
}

#[async_trait]
impl GameProgram for RejectingProgram {
    async fn initialize_game(&self, map: Vec<u8>) -> Result<TransactionId, ProgramError> {
        self.inner.initialize_game(map).await
    }

    async fn fetch_game(&self) -> Result<GameSnapshot, ProgramError> {
        self.inner.fetch_game().await
    }

    async fn fetch_player(&self) -> Result<PlayerSnapshot, ProgramError> {
        self.inner.fetch_player().await
    }

    async fn move_unit(&self, unit_id: u32, _x: u8, _y: u8) -> Result<TransactionId, ProgramError> {
        Err(ProgramError::CannotMove(unit_id))
    }

    async fn end_turn(&self) -> Result<TransactionId, ProgramError> {
        self.inner.end_turn().await
    }
}

#[tokio::test]
async fn program_rejection_leaves_local_state_unchanged() {
    let program = Arc::new(RejectingProgram {
        inner: LocalGameProgram::new(),
    });
    let (handle, mut events) = spawn_session(program);
    next_event(&mut events).await;

    handle.click_tile(Position::new(2, 3)).await.unwrap();
    next_event(&mut events).await; // SelectionChanged

    handle.click_tile(Position::new(2, 5)).await.unwrap();
    match next_event(&mut events).await {
        GameEvent::MoveRejected {
            unit, destination, ..
        } => {
            assert_eq!(unit, UnitId(2));
            assert_eq!(destination, Position::new(2, 5));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    let snapshot = handle.snapshot().await.unwrap();
    let warrior = snapshot
        .units
        .iter()
        .find(|u| u.id == UnitId(2))
        .copied()
        .unwrap();
    // Unit did not move and stays selected so the user can retry.
    assert_eq!(warrior.position, Position::new(2, 3));
    assert_eq!(snapshot.selected, Some(UnitId(2)));
    assert_eq!(snapshot.submission, SubmissionState::Failed);
}

/// Confirms transactions normally but loses its RPC connection right after
/// the first confirmed move, so every follow-up account fetch fails.
struct FlakyFetchProgram {
    inner: LocalGameProgram,
    fetches_broken: AtomicBool,
}

impl FlakyFetchProgram {
    fn new() -> Self {
        Self {
            inner: LocalGameProgram::new(),
            fetches_broken: AtomicBool::new(false),
        }
    }

    fn rpc_down(&self) -> ProgramError {
        TransportError::Network("rpc unavailable".into()).into()
    }
}

#[async_trait]
impl GameProgram for FlakyFetchProgram {
    async fn initialize_game(&self, map: Vec<u8>) -> Result<TransactionId, ProgramError> {
        self.inner.initialize_game(map).await
    }

    async fn fetch_game(&self) -> Result<GameSnapshot, ProgramError> {
        if self.fetches_broken.load(Ordering::SeqCst) {
            return Err(self.rpc_down());
        }
        self.inner.fetch_game().await
    }

    async fn fetch_player(&self) -> Result<PlayerSnapshot, ProgramError> {
        if self.fetches_broken.load(Ordering::SeqCst) {
            return Err(self.rpc_down());
        }
        self.inner.fetch_player().await
    }

    async fn move_unit(&self, unit_id: u32, x: u8, y: u8) -> Result<TransactionId, ProgramError> {
        let tx = self.inner.move_unit(unit_id, x, y).await?;
        self.fetches_broken.store(true, Ordering::SeqCst);
        Ok(tx)
    }

    async fn end_turn(&self) -> Result<TransactionId, ProgramError> {
        self.inner.end_turn().await
    }
}

#[tokio::test]
async fn failed_post_move_refresh_does_not_wedge_the_worker() {
    let (handle, mut events) = spawn_session(Arc::new(FlakyFetchProgram::new()));
    next_event(&mut events).await;

    handle.click_tile(Position::new(2, 3)).await.unwrap();
    next_event(&mut events).await; // SelectionChanged

    // The move confirms, then the refresh blows up.
    handle.click_tile(Position::new(2, 5)).await.unwrap();
    assert!(matches!(
        next_event(&mut events).await,
        GameEvent::MoveSubmitted { .. }
    ));
    assert!(matches!(
        next_event(&mut events).await,
        GameEvent::ProgramFailed { .. }
    ));

    // The submission settled as Failed, not stuck at Submitting.
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.submission, SubmissionState::Failed);

    // The worker still responds to clicks: selecting the Settler works.
    handle.click_tile(Position::new(2, 2)).await.unwrap();
    match next_event(&mut events).await {
        GameEvent::SelectionChanged { selected } => assert_eq!(selected, Some(UnitId(0))),
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(
        handle.snapshot().await.unwrap().submission,
        SubmissionState::Idle
    );
}

#[tokio::test]
async fn startup_fails_without_a_game_when_auto_initialize_is_off() {
    let config = RuntimeConfig {
        auto_initialize: false,
        ..test_config()
    };
    let mut runtime = Runtime::new(config, Arc::new(LocalGameProgram::new()));
    assert!(runtime.run().await.is_err());
}
