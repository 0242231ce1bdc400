//! Client-side tactical grid logic and data types shared across the client.
//!
//! `game-core` owns the in-memory representation of one 20×20 map: tiles,
//! units, and the selection state machine. It resolves pointer input into
//! select / deselect / move-intent outcomes and enforces the movement-range
//! and terrain-blocking rules locally. Validation here is advisory only; the
//! external on-chain program remains the final authority and is consumed
//! through the `client-blockchain-core` boundary.
pub mod common;
pub mod engine;
pub mod map;
pub mod range;
pub mod unit;

pub use common::{Position, UnitId};
pub use engine::{ClickAction, ClickOutcome, GridEngine, MoveRejection};
pub use map::{GRID_HEIGHT, GRID_WIDTH, MapGrid, TILE_COUNT, TerrainKind, Tile};
pub use unit::{Unit, UnitKind, UnitRoster};
