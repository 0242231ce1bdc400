//! Info-panel views: selected unit and resource balances.

use game_core::{Unit, UnitId, UnitKind};
use runtime::SessionSnapshot;

/// Selected-unit panel contents.
#[derive(Clone, Copy, Debug)]
pub struct UnitInfoView {
    pub id: UnitId,
    pub kind: UnitKind,
    pub health: u8,
    pub remaining_moves: u8,
    /// Builder-only: remaining tile-upgrade actions.
    pub builds: Option<u8>,
    /// Combat units only.
    pub strength: Option<u8>,
}

impl UnitInfoView {
    /// View for the currently selected unit, if any.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Option<Self> {
        let selected = snapshot.selected?;
        let unit = snapshot.units.iter().find(|unit| unit.id == selected)?;
        Some(Self::from_unit(unit))
    }

    fn from_unit(unit: &Unit) -> Self {
        let builds = matches!(unit.kind, UnitKind::Builder).then_some(1);
        let strength = match unit.kind {
            UnitKind::Warrior | UnitKind::Barbarian => Some(20),
            UnitKind::Archer => Some(30),
            UnitKind::Swordsman => Some(50),
            UnitKind::Settler | UnitKind::Builder => None,
        };

        Self {
            id: unit.id,
            kind: unit.kind,
            health: unit.health,
            remaining_moves: unit.movement_range,
            builds,
            strength,
        }
    }
}

/// Resource header contents.
#[derive(Clone, Copy, Debug)]
pub struct ResourceView {
    pub gold: u64,
    pub food: u64,
    pub lumber: u64,
    pub turn: u32,
}

impl ResourceView {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        Self {
            gold: snapshot.resources.gold,
            food: snapshot.resources.food,
            lumber: snapshot.resources.lumber,
            turn: snapshot.turn,
        }
    }
}
