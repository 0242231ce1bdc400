//! Click-driven state transitions on the map grid.

use crate::common::{Position, UnitId};
use crate::map::{MapGrid, TerrainKind};
use crate::range::is_within_distance;
use crate::unit::{Unit, UnitRoster};

/// Why a destination was locally rejected as a move target.
///
/// Local validation is advisory: it keeps obviously illegal moves from being
/// submitted, but the program may still reject a move the client considered
/// legal (stale range data, a unit that already moved this turn).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveRejection {
    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is occupied")]
    Occupied { destination: Position },

    #[error("destination {destination} is blocked terrain")]
    Blocked { destination: Position },

    #[error("destination {destination} is {distance} tiles away, range is {range}")]
    OutOfRange {
        destination: Position,
        distance: u32,
        range: u8,
    },
}

/// What a tile click resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// A locally validated move request for the external authority.
    MoveIntent {
        unit: UnitId,
        destination: Position,
    },
    /// The selection toggled; `selected` is the unit selected afterwards.
    SelectionChanged { selected: Option<UnitId> },
    /// Empty tile, nothing selected: no state change.
    None,
}

/// Full outcome of one click.
///
/// A Village click reports the interaction alongside whatever the selection
/// logic produced; the two are independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub village: Option<Position>,
    pub action: ClickAction,
}

/// The tactical grid engine.
///
/// Owns the authoritative-for-display copy of tiles and units and turns
/// pointer input into select, deselect, or move-intent outcomes. All
/// operations are synchronous; state replacement is atomic from the
/// perspective of the single-threaded caller.
#[derive(Clone, Debug, Default)]
pub struct GridEngine {
    map: MapGrid,
    units: UnitRoster,
}

impl GridEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full tile set from wire display indices.
    pub fn load_map(&mut self, indices: &[u8]) {
        self.map = MapGrid::from_display_indices(indices);
    }

    /// Replace the full unit set. Every selection flag is reset.
    pub fn load_units(&mut self, units: Vec<Unit>) {
        self.units.load(units);
    }

    pub fn map(&self) -> &MapGrid {
        &self.map
    }

    pub fn units(&self) -> &UnitRoster {
        &self.units
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        self.units.selected()
    }

    /// Advisory validation of moving `unit` to `destination`.
    pub fn validate_move(&self, unit: &Unit, destination: Position) -> Result<(), MoveRejection> {
        let Some(tile) = self.map.tile(destination) else {
            return Err(MoveRejection::OutOfBounds { destination });
        };
        if self.units.is_occupied(destination) {
            return Err(MoveRejection::Occupied { destination });
        }
        if tile.terrain.is_blocked() {
            return Err(MoveRejection::Blocked { destination });
        }
        let distance = unit.position.manhattan_distance(destination);
        if distance > unit.movement_range as u32 {
            return Err(MoveRejection::OutOfRange {
                destination,
                distance,
                range: unit.movement_range,
            });
        }
        Ok(())
    }

    /// Resolve a click on `position`.
    ///
    /// In order:
    /// 1. a selected unit moves to an unoccupied, in-range tile (selection is
    ///    NOT cleared here; it is cleared by the refresh that follows the
    ///    external confirmation),
    /// 2. otherwise an occupant's selection is toggled, deselecting all
    ///    others in the same update,
    /// 3. otherwise nothing changes.
    ///
    /// A Village tile additionally reports a village interaction regardless
    /// of which branch ran.
    pub fn handle_tile_click(&mut self, position: Position) -> ClickOutcome {
        let village = (self.map.terrain(position) == Some(TerrainKind::Village))
            .then_some(position);

        let occupant = self.units.unit_at(position).map(|unit| unit.id);
        let selected = self.units.selected().copied();

        let action = match (selected, occupant) {
            (Some(unit), None)
                if is_within_distance(
                    &self.map,
                    unit.position,
                    position,
                    unit.movement_range as u32,
                ) =>
            {
                tracing::debug!(unit = %unit.id, destination = %position, "move intent");
                ClickAction::MoveIntent {
                    unit: unit.id,
                    destination: position,
                }
            }
            (_, Some(occupant)) => ClickAction::SelectionChanged {
                selected: self.units.toggle_selection(occupant),
            },
            _ => ClickAction::None,
        };

        ClickOutcome { village, action }
    }
}
