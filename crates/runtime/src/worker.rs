//! The session worker: single writer over the grid engine.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use client_blockchain_core::{GameProgram, ProgramError, ResourceBalances};
use game_core::{ClickAction, GridEngine, Position, UnitId};

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::events::GameEvent;
use crate::handle::RuntimeHandle;
use crate::mapgen;
use crate::snapshot::{SessionSnapshot, SubmissionState};

/// Commands accepted by the worker.
pub(crate) enum Command {
    TileClicked { position: Position },
    EndTurn,
    Refresh,
    QuerySnapshot { reply: oneshot::Sender<SessionSnapshot> },
}

/// Session runtime: owns the engine and the channel endpoints.
///
/// There is exactly one logical writer (this worker), so no locking is
/// needed around the engine; state replacement is atomic from the
/// perspective of command processing.
pub struct Runtime {
    config: RuntimeConfig,
    program: Arc<dyn GameProgram>,
    engine: GridEngine,
    resources: ResourceBalances,
    turn: u32,
    submission: SubmissionState,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
    handle: RuntimeHandle,
}

impl Runtime {
    pub fn new(config: RuntimeConfig, program: Arc<dyn GameProgram>) -> Self {
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
        let (event_tx, _) = broadcast::channel(config.event_capacity);
        let handle = RuntimeHandle::new(command_tx, event_tx.clone());

        Self {
            config,
            program,
            engine: GridEngine::new(),
            resources: ResourceBalances::default(),
            turn: 0,
            submission: SubmissionState::Idle,
            command_rx,
            event_tx,
            handle,
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Run the worker until every handle is dropped.
    pub async fn run(&mut self) -> Result<()> {
        self.sync_initial().await?;

        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command).await;
        }

        tracing::info!("runtime worker stopped");
        Ok(())
    }

    /// First sync. Creates the game account when the program reports it
    /// missing and auto-initialization is enabled.
    async fn sync_initial(&mut self) -> Result<()> {
        match self.refresh_state().await {
            Ok(()) => {}
            Err(ProgramError::NotInitialized) if self.config.auto_initialize => {
                tracing::info!("no game account found, initializing a new game");
                let map = mapgen::generate_map(self.config.map_seed);
                self.program.initialize_game(map).await?;
                self.refresh_state().await?;
            }
            Err(err) => return Err(err.into()),
        }
        self.emit(GameEvent::StateRefreshed);
        Ok(())
    }

    async fn handle_command(&mut self, command: Command) {
        match command {
            Command::QuerySnapshot { reply } => {
                // The frontend may have given up waiting; ignore send errors.
                let _ = reply.send(self.snapshot());
            }
            Command::Refresh => {
                match self.refresh_state().await {
                    Ok(()) => self.emit(GameEvent::StateRefreshed),
                    Err(err) => self.report_failure("refresh", err),
                }
            }
            Command::TileClicked { position } => self.handle_tile_click(position).await,
            Command::EndTurn => self.handle_end_turn().await,
        }
    }

    async fn handle_tile_click(&mut self, position: Position) {
        // Commands are processed strictly serially, so a submission has
        // always settled by the time the next click is handled; suppressing
        // clicks while one is outstanding is the frontend's job.
        if self.submission == SubmissionState::Failed {
            self.submission = SubmissionState::Idle;
        }

        let outcome = self.engine.handle_tile_click(position);

        if let Some(village) = outcome.village {
            self.emit(GameEvent::VillageClicked { position: village });
        }

        match outcome.action {
            ClickAction::MoveIntent { unit, destination } => {
                self.submit_move(unit, destination).await;
            }
            ClickAction::SelectionChanged { selected } => {
                self.emit(GameEvent::SelectionChanged { selected });
            }
            ClickAction::None => {}
        }
    }

    /// Submit a locally validated move intent and refresh on confirmation.
    ///
    /// Selection is not cleared optimistically; the refresh that follows a
    /// confirmed move replaces the roster, which resets it. On rejection the
    /// local state is left untouched so the user can retry.
    async fn submit_move(&mut self, unit: UnitId, destination: Position) {
        // Pre-flight against local state; the program re-validates anyway,
        // but a locally illegal move never leaves the client.
        if let Some(mover) = self.engine.units().get(unit)
            && let Err(rejection) = self.engine.validate_move(mover, destination)
        {
            tracing::debug!(%unit, %destination, %rejection, "move rejected locally");
            self.emit(GameEvent::MoveRejected {
                unit,
                destination,
                reason: rejection.to_string(),
            });
            return;
        }

        self.submission = SubmissionState::Submitting;

        match self
            .program
            .move_unit(unit.0, destination.x, destination.y)
            .await
        {
            Ok(tx) => {
                tracing::info!(%unit, %destination, tx = ?tx.as_bytes(), "move confirmed");
                self.emit(GameEvent::MoveSubmitted { unit, destination });
                match self.refresh_state().await {
                    Ok(()) => self.emit(GameEvent::StateRefreshed),
                    Err(err) => {
                        // Leaving `Submitting` here would wedge the session;
                        // a later click or refresh retries from `Failed`.
                        self.submission = SubmissionState::Failed;
                        self.report_failure("post-move refresh", err);
                    }
                }
            }
            Err(err) => {
                tracing::warn!(%unit, %destination, error = %err, "move rejected by program");
                self.submission = SubmissionState::Failed;
                self.emit(GameEvent::MoveRejected {
                    unit,
                    destination,
                    reason: err.to_string(),
                });
            }
        }
    }

    async fn handle_end_turn(&mut self) {
        self.submission = SubmissionState::Submitting;

        match self.program.end_turn().await {
            Ok(_) => match self.refresh_state().await {
                Ok(()) => {
                    let turn = self.turn;
                    self.emit(GameEvent::TurnEnded { turn });
                    self.emit(GameEvent::StateRefreshed);
                }
                Err(err) => {
                    self.submission = SubmissionState::Failed;
                    self.report_failure("post-turn refresh", err);
                }
            },
            Err(err) => {
                self.submission = SubmissionState::Failed;
                self.report_failure("end turn", err);
            }
        }
    }

    /// Replace local state wholesale from freshly fetched accounts.
    async fn refresh_state(&mut self) -> std::result::Result<(), ProgramError> {
        let game = self.program.fetch_game().await?;
        let player = self.program.fetch_player().await?;

        self.engine.load_map(&game.map);
        self.engine
            .load_units(player.units.into_iter().map(|raw| raw.decode()).collect());
        self.resources = player.resources;
        self.turn = game.turn;
        self.submission = SubmissionState::Idle;
        Ok(())
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            map: self.engine.map().clone(),
            units: self.engine.units().iter().copied().collect(),
            selected: self.engine.selected_unit().map(|unit| unit.id),
            resources: self.resources,
            turn: self.turn,
            submission: self.submission,
        }
    }

    fn report_failure(&mut self, context: &str, err: ProgramError) {
        tracing::error!(context, error = %err, "program call failed");
        self.emit(GameEvent::ProgramFailed {
            context: format!("{context}: {err}"),
        });
    }

    fn emit(&self, event: GameEvent) {
        // No subscribers is fine; events are advisory.
        let _ = self.event_tx.send(event);
    }
}
