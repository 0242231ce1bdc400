use crate::common::Position;

pub const GRID_WIDTH: u8 = 20;
pub const GRID_HEIGHT: u8 = 20;
pub const TILE_COUNT: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Canonical terrain classes decoded from the wire display index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Empty,
    Plains,
    Village,
    Mountains,
}

impl TerrainKind {
    /// Decode a terrain class from a wire display index.
    ///
    /// Unknown indices fall back to [`TerrainKind::Plains`] so a partially
    /// synced map never crashes the render loop.
    pub fn from_display_index(index: u8) -> Self {
        match index {
            0 => TerrainKind::Empty,
            1..=8 => TerrainKind::Plains,
            9 => TerrainKind::Mountains,
            10 => TerrainKind::Village,
            other => {
                tracing::debug!(index = other, "unknown terrain index, rendering as plains");
                TerrainKind::Plains
            }
        }
    }

    /// Blocked terrain cannot be entered regardless of distance. This is a
    /// static, engine-wide policy, not configurable per unit.
    pub fn is_blocked(self) -> bool {
        matches!(self, TerrainKind::Village | TerrainKind::Mountains)
    }
}

/// One cell of the fixed 20×20 grid.
///
/// `display_index` is the raw wire value, kept only so the presentation layer
/// can pick a terrain sprite/glyph variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub position: Position,
    pub terrain: TerrainKind,
    pub display_index: u8,
}

impl Tile {
    pub fn new(position: Position, display_index: u8) -> Self {
        Self {
            position,
            terrain: TerrainKind::from_display_index(display_index),
            display_index,
        }
    }

    /// Substitute for a missing map entry: a Plains tile with display index 0.
    pub fn default_at(position: Position) -> Self {
        Self {
            position,
            terrain: TerrainKind::Plains,
            display_index: 0,
        }
    }
}

/// The full 400-entry tile set, row-major.
///
/// There is exactly one tile per `(x, y)` pair; the set is replaced wholesale
/// on every refresh and tiles are never individually destroyed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapGrid {
    tiles: Vec<Tile>,
}

impl MapGrid {
    /// Build the grid from wire display indices.
    ///
    /// Accepts exactly [`TILE_COUNT`] entries. Missing entries are substituted
    /// with [`Tile::default_at`] and surplus entries are ignored; both cases
    /// are logged as warnings, never treated as fatal.
    pub fn from_display_indices(indices: &[u8]) -> Self {
        if indices.len() != TILE_COUNT {
            tracing::warn!(
                received = indices.len(),
                expected = TILE_COUNT,
                "map payload has wrong tile count, padding with plains"
            );
        }

        let tiles = (0..TILE_COUNT)
            .map(|i| {
                let position = Self::position_of(i);
                match indices.get(i) {
                    Some(&index) => Tile::new(position, index),
                    None => Tile::default_at(position),
                }
            })
            .collect();

        Self { tiles }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < GRID_WIDTH && position.y < GRID_HEIGHT
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !self.contains(position) {
            return None;
        }
        self.tiles.get(Self::index_of(position))
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.tile(position).map(|tile| tile.terrain)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn index_of(position: Position) -> usize {
        position.y as usize * GRID_WIDTH as usize + position.x as usize
    }

    fn position_of(index: usize) -> Position {
        Position::new(
            (index % GRID_WIDTH as usize) as u8,
            (index / GRID_WIDTH as usize) as u8,
        )
    }
}

impl Default for MapGrid {
    fn default() -> Self {
        Self::from_display_indices(&[0; TILE_COUNT])
    }
}
