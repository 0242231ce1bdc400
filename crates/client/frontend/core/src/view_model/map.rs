//! Map view types for 2D grid rendering.

use game_core::{GRID_HEIGHT, GRID_WIDTH, Position, TerrainKind, UnitId, UnitKind, range};
use runtime::SessionSnapshot;

/// 2D map view optimized for grid rendering.
#[derive(Clone, Debug)]
pub struct MapView {
    pub width: u8,
    pub height: u8,
    /// Rows in render order: row 0 is the top of the screen.
    pub rows: Vec<Vec<TileCell>>,
}

impl MapView {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let mut rows = Vec::with_capacity(GRID_HEIGHT as usize);

        for y in 0..GRID_HEIGHT {
            let mut row = Vec::with_capacity(GRID_WIDTH as usize);
            for x in 0..GRID_WIDTH {
                row.push(TileCell::from_snapshot(snapshot, Position::new(x, y)));
            }
            rows.push(row);
        }

        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            rows,
        }
    }
}

/// Single tile in the map view.
#[derive(Clone, Copy, Debug)]
pub struct TileCell {
    pub position: Position,
    pub terrain: TerrainKind,
    pub display_index: u8,
    /// Highlighted as reachable by the selected unit.
    pub in_range: bool,
    pub occupant: Option<OccupantView>,
}

impl TileCell {
    fn from_snapshot(snapshot: &SessionSnapshot, position: Position) -> Self {
        let (terrain, display_index) = snapshot
            .map
            .tile(position)
            .map(|tile| (tile.terrain, tile.display_index))
            .unwrap_or((TerrainKind::Plains, 0));

        let occupant = snapshot
            .units
            .iter()
            .find(|unit| unit.position == position)
            .map(|unit| OccupantView {
                id: unit.id,
                kind: unit.kind,
                selected: unit.selected,
            });

        Self {
            position,
            terrain,
            display_index,
            in_range: range::in_range_of_any(&snapshot.map, &snapshot.units, position),
            occupant,
        }
    }
}

/// Unit as rendered on its tile.
#[derive(Clone, Copy, Debug)]
pub struct OccupantView {
    pub id: UnitId,
    pub kind: UnitKind,
    pub selected: bool,
}
