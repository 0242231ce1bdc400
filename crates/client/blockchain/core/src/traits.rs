//! Program access traits and their error sets.

use async_trait::async_trait;

use crate::types::{GameSnapshot, PlayerSnapshot, TransactionId};

/// Transport layer errors (network, signing, RPC plumbing).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Rejections reported by the program itself.
///
/// These mirror the authority's error set; the client treats them as final
/// and leaves local state unchanged so the user can retry.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("game account is not initialized")]
    NotInitialized,

    #[error("game account already exists")]
    AlreadyInitialized,

    #[error("unit {0} not found")]
    UnitNotFound(u32),

    #[error("destination ({x}, {y}) is outside the map bounds")]
    OutOfMapBounds { x: u8, y: u8 },

    #[error("unit {0} has no movement points left")]
    CannotMove(u32),

    #[error("destination is out of movement range: distance {distance}, remaining {remaining}")]
    OutOfMovementRange { distance: u8, remaining: u8 },

    #[error("destination ({x}, {y}) is occupied")]
    TileOccupied { x: u8, y: u8 },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Typed operations of the on-chain game program.
///
/// Submissions are fire-and-forget from the engine's point of view: the
/// caller awaits confirmation, then re-fetches state wholesale.
#[async_trait]
pub trait GameProgram: Send + Sync {
    /// Create the game account with the given 400-entry display-index map.
    async fn initialize_game(&self, map: Vec<u8>) -> Result<TransactionId, ProgramError>;

    /// Fetch the game account (map + turn counter).
    async fn fetch_game(&self) -> Result<GameSnapshot, ProgramError>;

    /// Fetch the player account (units + resource balances).
    async fn fetch_player(&self) -> Result<PlayerSnapshot, ProgramError>;

    /// Submit a move-unit transaction. The program performs the final
    /// authoritative validation and may reject moves the client considered
    /// legal.
    async fn move_unit(&self, unit_id: u32, x: u8, y: u8) -> Result<TransactionId, ProgramError>;

    /// Submit an end-turn transaction: movement budgets reset, resources
    /// accrue, the turn counter advances.
    async fn end_turn(&self) -> Result<TransactionId, ProgramError>;
}

/// Composite trait all chain backends implement.
#[async_trait]
pub trait GameChain: GameProgram {
    /// Backend name (e.g. "local", "solana").
    fn name(&self) -> &str;

    /// Network name (e.g. "in-memory", "devnet").
    fn network(&self) -> &str;
}
