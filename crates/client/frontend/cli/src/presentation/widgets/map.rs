//! Map grid widget: terrain, units, reachable-tile highlight, cursor.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use game_core::TerrainKind;
use runtime::SessionSnapshot;

use crate::state::AppState;
use client_frontend_core::{MapView, TileCell};

/// Render the map panel.
///
/// Returns the inner grid rectangle for mouse hit-testing. Tiles are two
/// columns wide and one row tall.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    app_state: &AppState,
) -> Option<Rect> {
    let block = Block::default().borders(Borders::ALL).title(" Map ");
    let inner = block.inner(area);

    let view = MapView::from_snapshot(snapshot);
    let lines: Vec<Line> = view
        .rows
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| tile_span(cell, app_state))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);

    (inner.width > 0 && inner.height > 0).then_some(inner)
}

fn tile_span(cell: &TileCell, app_state: &AppState) -> Span<'static> {
    let (glyph, mut style) = match &cell.occupant {
        Some(occupant) => {
            let glyph = match occupant.kind {
                game_core::UnitKind::Settler => "S ",
                game_core::UnitKind::Builder => "B ",
                game_core::UnitKind::Warrior => "W ",
                game_core::UnitKind::Archer => "A ",
                game_core::UnitKind::Swordsman => "X ",
                game_core::UnitKind::Barbarian => "b ",
            };
            let style = if occupant.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            (glyph, style)
        }
        None => terrain_span(cell),
    };

    if cell.in_range {
        style = style.bg(Color::Blue);
    }
    if cell.position == app_state.cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(glyph, style)
}

fn terrain_span(cell: &TileCell) -> (&'static str, Style) {
    match cell.terrain {
        TerrainKind::Empty => ("  ", Style::default()),
        TerrainKind::Plains => (". ", Style::default().fg(Color::Green)),
        TerrainKind::Village => ("V ", Style::default().fg(Color::Magenta)),
        TerrainKind::Mountains => ("^ ", Style::default().fg(Color::Gray)),
    }
}
