//! Cloneable façade for issuing commands to the session worker.
//!
//! [`RuntimeHandle`] hides channel plumbing: tile clicks and turn ends are
//! fire-and-forget sends, snapshot queries round-trip over a oneshot reply.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::Position;

use crate::error::{Result, RuntimeError};
use crate::events::GameEvent;
use crate::snapshot::SessionSnapshot;
use crate::worker::Command;

/// Client-facing handle to interact with the runtime.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Report a tile click. Fire-and-forget: the worker resolves it into a
    /// selection change, a move submission, or nothing, and reports back via
    /// events.
    pub async fn click_tile(&self, position: Position) -> Result<()> {
        self.send(Command::TileClicked { position }).await
    }

    /// Submit an end-turn request.
    pub async fn end_turn(&self) -> Result<()> {
        self.send(Command::EndTurn).await
    }

    /// Force a state re-fetch from the external program.
    pub async fn refresh(&self) -> Result<()> {
        self.send(Command::Refresh).await
    }

    /// Query a point-in-time copy of the session state.
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::QuerySnapshot { reply: reply_tx }).await?;
        Ok(reply_rx.await?)
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
