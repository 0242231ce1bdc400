//! Event loop multiplexing session events, terminal input, and redraw ticks.
use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::{
    sync::broadcast::error::RecvError,
    time::{self, Duration, Instant},
};

use game_core::{Position, range};
use runtime::{GameEvent, RuntimeHandle, SessionSnapshot};

use crate::{
    config::CliConfig,
    input::{self, InputAction},
    presentation::{terminal::Tui, ui},
    state::AppState,
};
use client_frontend_core::{EventConsumer, construction_options};

/// Waiting indicator is force-cleared after this long without a session
/// event, in case a predicted submission never happened.
const WAITING_TIMEOUT: Duration = Duration::from_secs(5);

/// Orchestrates the terminal session: owns the UI state and the latest
/// session snapshot, reacts to input and session events, and re-renders.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    handle: RuntimeHandle,
    consumer: C,
    app_state: AppState,
    snapshot: SessionSnapshot,
    cli_config: CliConfig,
    waiting_since: Option<Instant>,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        consumer: C,
        initial_snapshot: SessionSnapshot,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            handle,
            consumer,
            app_state: AppState::default(),
            snapshot: initial_snapshot,
            cli_config,
            waiting_since: None,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        let mut events = self.handle.subscribe();
        let mut input_stream = EventStream::new();

        let mut frame_interval =
            time::interval(Duration::from_millis(self.cli_config.frame_interval_ms));
        frame_interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        let mut dirty = true;

        loop {
            if dirty {
                self.render(terminal)?;
                dirty = false;
            }
            if self.app_state.quit {
                break;
            }

            tokio::select! {
                result = events.recv() => {
                    match result {
                        Ok(event) => dirty |= self.handle_session_event(event).await?,
                        Err(RecvError::Closed) => {
                            tracing::warn!("session event stream closed");
                            break;
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "dropped stale session events");
                            self.consumer
                                .message_log_mut()
                                .warning(format!("Dropped {skipped} stale events"));
                            self.resync().await?;
                            dirty = true;
                        }
                    }
                }
                maybe_event = input_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => dirty |= self.handle_terminal_event(&event).await?,
                        Some(Err(error)) => tracing::warn!(%error, "terminal input error"),
                        None => break,
                    }
                }
                _ = frame_interval.tick() => {
                    dirty |= self.expire_waiting();
                }
            }
        }

        Ok(self.consumer)
    }

    /// Apply a session event. Returns whether a redraw is needed.
    async fn handle_session_event(&mut self, event: GameEvent) -> Result<bool> {
        // Any worker response means the outstanding submission settled.
        self.clear_waiting();

        if let GameEvent::VillageClicked { position } = event {
            self.app_state.open_village(position);
        }

        let impact = self.consumer.on_event(&event);
        if impact.snapshot_stale {
            self.resync().await?;
        }

        Ok(impact.requires_redraw || impact.snapshot_stale)
    }

    async fn handle_terminal_event(&mut self, event: &crossterm::event::Event) -> Result<bool> {
        let action = input::translate(event, self.app_state.village_open());
        match action {
            InputAction::Quit => {
                self.app_state.quit = true;
            }
            InputAction::MoveCursor { dx, dy } => {
                self.app_state.move_cursor(dx, dy);
            }
            InputAction::ClickCursor => {
                self.click(self.app_state.cursor).await?;
            }
            InputAction::ClickScreen { column, row } => {
                if let Some(position) = self.app_state.tile_at_screen(column, row) {
                    self.app_state.cursor = position;
                    self.click(position).await?;
                }
            }
            InputAction::EndTurn => {
                if !self.app_state.waiting {
                    self.set_waiting();
                    self.handle.end_turn().await?;
                }
            }
            InputAction::Refresh => {
                self.handle.refresh().await?;
            }
            InputAction::CloseModal => {
                self.app_state.close_village();
            }
            InputAction::ModalUp => {
                if let Some(menu) = self.app_state.village.as_mut() {
                    menu.cursor = menu.cursor.saturating_sub(1);
                }
            }
            InputAction::ModalDown => {
                if let Some(menu) = self.app_state.village.as_mut() {
                    menu.cursor = (menu.cursor + 1).min(construction_options().len() - 1);
                }
            }
            InputAction::None => return Ok(false),
        }
        Ok(true)
    }

    /// Forward a tile click to the worker. Clicks are dropped while a
    /// submission is outstanding; the indicator is raised only when the
    /// click should submit a move, since no-op clicks produce no event to
    /// clear it.
    async fn click(&mut self, position: Position) -> Result<()> {
        if self.app_state.waiting {
            tracing::debug!(%position, "dropping click while a submission is outstanding");
            return Ok(());
        }
        if self.predicts_move_submission(position) {
            self.set_waiting();
        }
        self.handle.click_tile(position).await?;
        Ok(())
    }

    /// Mirror of the engine's click resolution against the last snapshot:
    /// a selected unit clicking an empty reachable tile submits a move.
    fn predicts_move_submission(&self, position: Position) -> bool {
        let Some(unit) = self
            .snapshot
            .selected
            .and_then(|id| self.snapshot.units.iter().find(|unit| unit.id == id))
        else {
            return false;
        };
        if self.snapshot.units.iter().any(|u| u.position == position) {
            return false;
        }
        range::is_within_distance(
            &self.snapshot.map,
            unit.position,
            position,
            unit.movement_range as u32,
        )
    }

    fn set_waiting(&mut self) {
        self.app_state.waiting = true;
        self.waiting_since = Some(Instant::now());
    }

    fn clear_waiting(&mut self) {
        self.app_state.waiting = false;
        self.waiting_since = None;
    }

    /// Clear a stuck indicator when the prediction was wrong and the worker
    /// never answered.
    fn expire_waiting(&mut self) -> bool {
        match self.waiting_since {
            Some(since) if since.elapsed() > WAITING_TIMEOUT => {
                tracing::warn!("submission indicator timed out without a session event");
                self.clear_waiting();
                true
            }
            _ => false,
        }
    }

    async fn resync(&mut self) -> Result<()> {
        self.snapshot = self.handle.snapshot().await?;
        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            snapshot: &self.snapshot,
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            console_height: self.cli_config.console_height,
        };
        let map_area = ui::render(terminal, &ctx)?;
        self.app_state.map_area = map_area;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use client_blockchain_core::LocalGameProgram;
    use runtime::{Runtime, RuntimeConfig};
    use tokio::sync::broadcast;

    use crate::event::CliEventConsumer;
    use client_frontend_core::MessageLog;

    async fn session_loop() -> (
        EventLoop<CliEventConsumer>,
        broadcast::Receiver<GameEvent>,
    ) {
        let mut runtime = Runtime::new(
            RuntimeConfig::default(),
            Arc::new(LocalGameProgram::new()),
        );
        let handle = runtime.handle();
        let mut events = handle.subscribe();
        tokio::spawn(async move {
            let _ = runtime.run().await;
        });

        // Initial StateRefreshed.
        tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .unwrap()
            .unwrap();

        let snapshot = handle.snapshot().await.unwrap();
        let consumer = CliEventConsumer::new(MessageLog::new(8));
        let event_loop = EventLoop::new(handle, consumer, snapshot, CliConfig::default());
        (event_loop, events)
    }

    #[tokio::test]
    async fn clicks_are_dropped_while_a_submission_is_outstanding() {
        let (mut event_loop, mut events) = session_loop().await;

        // Warrior tile: a click would normally toggle selection.
        event_loop.set_waiting();
        event_loop.click(Position::new(2, 3)).await.unwrap();
        assert!(
            tokio::time::timeout(Duration::from_millis(300), events.recv())
                .await
                .is_err(),
            "suppressed click must not reach the worker"
        );

        // Once the submission settles, clicking works again.
        event_loop.clear_waiting();
        event_loop.click(Position::new(2, 3)).await.unwrap();
        match tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .unwrap()
            .unwrap()
        {
            GameEvent::SelectionChanged { selected } => assert!(selected.is_some()),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn session_events_clear_the_waiting_indicator() {
        let (mut event_loop, _events) = session_loop().await;

        event_loop.set_waiting();
        event_loop
            .handle_session_event(GameEvent::StateRefreshed)
            .await
            .unwrap();
        assert!(!event_loop.app_state.waiting);
    }
}
