//! UI-local state: cursor, modal, pending-submission indicator.
use game_core::{GRID_HEIGHT, GRID_WIDTH, Position};
use ratatui::layout::Rect;

/// Mutable state owned by the event loop, separate from session snapshots.
#[derive(Debug, Default)]
pub struct AppState {
    /// Keyboard tile cursor.
    pub cursor: Position,
    /// Open village menu and its scroll offset.
    pub village: Option<VillageMenuState>,
    /// Set while a click that may submit is outstanding; cleared by the next
    /// session event. Drives the blocking wait indicator.
    pub waiting: bool,
    pub quit: bool,
    /// Screen rectangle of the map grid from the last render, for mouse
    /// hit-testing.
    pub map_area: Option<Rect>,
}

#[derive(Debug)]
pub struct VillageMenuState {
    pub position: Position,
    pub cursor: usize,
}

impl AppState {
    pub fn move_cursor(&mut self, dx: i8, dy: i8) {
        let x = self.cursor.x.saturating_add_signed(dx).min(GRID_WIDTH - 1);
        let y = self.cursor.y.saturating_add_signed(dy).min(GRID_HEIGHT - 1);
        self.cursor = Position::new(x, y);
    }

    pub fn open_village(&mut self, position: Position) {
        self.village = Some(VillageMenuState {
            position,
            cursor: 0,
        });
    }

    pub fn close_village(&mut self) {
        self.village = None;
    }

    pub fn village_open(&self) -> bool {
        self.village.is_some()
    }

    /// Map screen coordinates to a tile, if they land inside the grid.
    ///
    /// Tiles render two columns wide and one row tall.
    pub fn tile_at_screen(&self, column: u16, row: u16) -> Option<Position> {
        let area = self.map_area?;
        if column < area.x || row < area.y {
            return None;
        }
        let x = (column - area.x) / 2;
        let y = row - area.y;
        if x >= GRID_WIDTH as u16 || y >= GRID_HEIGHT as u16 {
            return None;
        }
        Some(Position::new(x as u8, y as u8))
    }
}
