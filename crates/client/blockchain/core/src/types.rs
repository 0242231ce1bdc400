//! Wire shapes exchanged with the on-chain program.

use serde::{Deserialize, Serialize};

use game_core::{Position, Unit, UnitId, UnitKind};

/// Generic transaction identifier (chain-specific digest bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionId(pub Vec<u8>);

impl TransactionId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Unit record exactly as the program account stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUnit {
    pub unit_id: u32,
    pub x: u8,
    pub y: u8,
    pub kind: u8,
    pub movement_range: u8,
    pub health: u8,
}

impl RawUnit {
    /// Decode into the engine's unit type. Unknown kinds fall back rather
    /// than failing, so partially-synced data never breaks the render loop.
    pub fn decode(self) -> Unit {
        Unit::new(
            UnitId(self.unit_id),
            UnitKind::from_wire(self.kind),
            Position::new(self.x, self.y),
            self.movement_range,
        )
        .with_health(self.health)
    }
}

impl From<Unit> for RawUnit {
    fn from(unit: Unit) -> Self {
        Self {
            unit_id: unit.id.0,
            x: unit.position.x,
            y: unit.position.y,
            kind: unit.kind.to_wire(),
            movement_range: unit.movement_range,
            health: unit.health,
        }
    }
}

/// Per-player resource balances accrued by the program each turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBalances {
    pub gold: u64,
    pub food: u64,
    pub lumber: u64,
}

/// Snapshot of the game account: the 400-entry display-index map and the
/// global turn counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub map: Vec<u8>,
    pub turn: u32,
}

/// Snapshot of the player account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub units: Vec<RawUnit>,
    pub resources: ResourceBalances,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_unit_round_trips_through_engine_type() {
        let raw = RawUnit {
            unit_id: 3,
            x: 7,
            y: 11,
            kind: 4,
            movement_range: 2,
            health: 80,
        };
        let unit = raw.decode();
        assert_eq!(unit.kind, UnitKind::Swordsman);
        assert!(!unit.selected);
        assert_eq!(RawUnit::from(unit), raw);
    }
}
