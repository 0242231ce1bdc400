//! In-memory stand-in for the on-chain program.
//!
//! Implements the authority's observable rules (bounds, Manhattan distance
//! against the remaining movement budget, occupancy, end-turn resets) so the
//! client can run offline and the runtime can be integration tested without
//! a network. It is deliberately not a rule engine: combat, production, and
//! research are out of scope for this repository.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use game_core::{GRID_HEIGHT, GRID_WIDTH, TILE_COUNT};

use crate::traits::{GameChain, GameProgram, ProgramError};
use crate::types::{GameSnapshot, PlayerSnapshot, RawUnit, ResourceBalances, TransactionId};

/// Movement budget every surviving unit is reset to at end of turn.
const BASE_MOVEMENT_RANGE: u8 = 2;

/// Fixed per-turn yields; the real program derives these from cities.
const GOLD_YIELD: u64 = 2;
const FOOD_YIELD: u64 = 2;
const LUMBER_YIELD: u64 = 1;

#[derive(Debug, Default)]
struct Accounts {
    game: Option<GameState>,
    tx_counter: u64,
}

#[derive(Debug)]
struct GameState {
    map: Vec<u8>,
    turn: u32,
    units: Vec<RawUnit>,
    resources: ResourceBalances,
}

/// In-memory game program.
#[derive(Clone, Default)]
pub struct LocalGameProgram {
    accounts: Arc<Mutex<Accounts>>,
}

impl LocalGameProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// The starting roster the program seeds on initialization.
    fn initial_units() -> Vec<RawUnit> {
        // Settler, Builder, Warrior: wire kinds 0..=2.
        vec![
            RawUnit {
                unit_id: 0,
                x: 2,
                y: 2,
                kind: 0,
                movement_range: BASE_MOVEMENT_RANGE,
                health: 100,
            },
            RawUnit {
                unit_id: 1,
                x: 3,
                y: 2,
                kind: 1,
                movement_range: BASE_MOVEMENT_RANGE,
                health: 100,
            },
            RawUnit {
                unit_id: 2,
                x: 2,
                y: 3,
                kind: 2,
                movement_range: BASE_MOVEMENT_RANGE,
                health: 100,
            },
        ]
    }

    fn next_tx_id(accounts: &mut Accounts) -> TransactionId {
        accounts.tx_counter += 1;
        TransactionId::from_bytes(accounts.tx_counter.to_le_bytes().to_vec())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Accounts> {
        self.accounts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GameProgram for LocalGameProgram {
    async fn initialize_game(&self, mut map: Vec<u8>) -> Result<TransactionId, ProgramError> {
        let mut accounts = self.lock();
        if accounts.game.is_some() {
            return Err(ProgramError::AlreadyInitialized);
        }
        map.resize(TILE_COUNT, 0);

        accounts.game = Some(GameState {
            map,
            turn: 1,
            units: Self::initial_units(),
            resources: ResourceBalances::default(),
        });
        tracing::info!("game account initialized");
        Ok(Self::next_tx_id(&mut accounts))
    }

    async fn fetch_game(&self) -> Result<GameSnapshot, ProgramError> {
        let accounts = self.lock();
        let game = accounts.game.as_ref().ok_or(ProgramError::NotInitialized)?;
        Ok(GameSnapshot {
            map: game.map.clone(),
            turn: game.turn,
        })
    }

    async fn fetch_player(&self) -> Result<PlayerSnapshot, ProgramError> {
        let accounts = self.lock();
        let game = accounts.game.as_ref().ok_or(ProgramError::NotInitialized)?;
        Ok(PlayerSnapshot {
            units: game.units.clone(),
            resources: game.resources,
        })
    }

    async fn move_unit(&self, unit_id: u32, x: u8, y: u8) -> Result<TransactionId, ProgramError> {
        let mut accounts = self.lock();
        let game = accounts.game.as_mut().ok_or(ProgramError::NotInitialized)?;

        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return Err(ProgramError::OutOfMapBounds { x, y });
        }

        let unit = *game
            .units
            .iter()
            .find(|u| u.unit_id == unit_id)
            .ok_or(ProgramError::UnitNotFound(unit_id))?;

        if unit.movement_range == 0 {
            return Err(ProgramError::CannotMove(unit_id));
        }

        let distance = unit.x.abs_diff(x) + unit.y.abs_diff(y);
        if distance > unit.movement_range {
            return Err(ProgramError::OutOfMovementRange {
                distance,
                remaining: unit.movement_range,
            });
        }

        if game
            .units
            .iter()
            .any(|u| u.x == x && u.y == y && u.unit_id != unit_id)
        {
            return Err(ProgramError::TileOccupied { x, y });
        }

        let moved = game
            .units
            .iter_mut()
            .find(|u| u.unit_id == unit_id)
            .ok_or(ProgramError::UnitNotFound(unit_id))?;
        moved.x = x;
        moved.y = y;
        // The budget is spent tile by tile, not per action.
        moved.movement_range -= distance;

        tracing::debug!(unit_id, x, y, distance, "unit moved");
        Ok(Self::next_tx_id(&mut accounts))
    }

    async fn end_turn(&self) -> Result<TransactionId, ProgramError> {
        let mut accounts = self.lock();
        let game = accounts.game.as_mut().ok_or(ProgramError::NotInitialized)?;

        for unit in &mut game.units {
            if unit.health > 0 {
                unit.movement_range = BASE_MOVEMENT_RANGE;
            }
        }
        game.resources.gold += GOLD_YIELD;
        game.resources.food += FOOD_YIELD;
        game.resources.lumber += LUMBER_YIELD;
        game.turn += 1;

        tracing::debug!(turn = game.turn, "turn ended");
        Ok(Self::next_tx_id(&mut accounts))
    }
}

#[async_trait]
impl GameChain for LocalGameProgram {
    fn name(&self) -> &str {
        "local"
    }

    fn network(&self) -> &str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn initialized() -> LocalGameProgram {
        let program = LocalGameProgram::new();
        program.initialize_game(vec![1; TILE_COUNT]).await.unwrap();
        program
    }

    #[tokio::test]
    async fn initialize_twice_is_rejected() {
        let program = initialized().await;
        let err = program.initialize_game(vec![1; TILE_COUNT]).await.unwrap_err();
        assert!(matches!(err, ProgramError::AlreadyInitialized));
    }

    #[tokio::test]
    async fn fetch_before_initialize_is_rejected() {
        let program = LocalGameProgram::new();
        assert!(matches!(
            program.fetch_game().await.unwrap_err(),
            ProgramError::NotInitialized
        ));
    }

    #[tokio::test]
    async fn move_spends_budget_by_distance_travelled() {
        let program = initialized().await;

        // Warrior (unit 2) starts at (2, 3) with budget 2.
        program.move_unit(2, 2, 5).await.unwrap();
        let player = program.fetch_player().await.unwrap();
        let warrior = player.units.iter().find(|u| u.unit_id == 2).unwrap();
        assert_eq!((warrior.x, warrior.y), (2, 5));
        assert_eq!(warrior.movement_range, 0);

        // Budget exhausted: any further move is rejected.
        assert!(matches!(
            program.move_unit(2, 2, 6).await.unwrap_err(),
            ProgramError::CannotMove(2)
        ));
    }

    #[tokio::test]
    async fn move_beyond_remaining_budget_is_rejected() {
        let program = initialized().await;
        let err = program.move_unit(2, 2, 6).await.unwrap_err();
        assert!(matches!(
            err,
            ProgramError::OutOfMovementRange {
                distance: 3,
                remaining: 2,
            }
        ));
    }

    #[tokio::test]
    async fn move_onto_occupied_tile_is_rejected() {
        let program = initialized().await;
        // Settler at (2, 2), Builder at (3, 2).
        let err = program.move_unit(0, 3, 2).await.unwrap_err();
        assert!(matches!(err, ProgramError::TileOccupied { x: 3, y: 2 }));
    }

    #[tokio::test]
    async fn move_out_of_bounds_is_rejected() {
        let program = initialized().await;
        assert!(matches!(
            program.move_unit(0, 20, 2).await.unwrap_err(),
            ProgramError::OutOfMapBounds { x: 20, y: 2 }
        ));
    }

    #[tokio::test]
    async fn end_turn_resets_budgets_and_accrues_resources() {
        let program = initialized().await;
        program.move_unit(2, 2, 5).await.unwrap();

        program.end_turn().await.unwrap();

        let game = program.fetch_game().await.unwrap();
        assert_eq!(game.turn, 2);

        let player = program.fetch_player().await.unwrap();
        assert!(player.units.iter().all(|u| u.movement_range == BASE_MOVEMENT_RANGE));
        assert_eq!(player.resources.gold, GOLD_YIELD);
        assert_eq!(player.resources.food, FOOD_YIELD);
        assert_eq!(player.resources.lumber, LUMBER_YIELD);
    }

    #[tokio::test]
    async fn short_map_is_padded_on_chain() {
        let program = LocalGameProgram::new();
        program.initialize_game(vec![1; 100]).await.unwrap();
        let game = program.fetch_game().await.unwrap();
        assert_eq!(game.map.len(), TILE_COUNT);
    }
}
