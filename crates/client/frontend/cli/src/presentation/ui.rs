//! Layout and render entry point for the terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use runtime::SessionSnapshot;

use crate::{presentation::terminal::Tui, presentation::widgets, state::AppState};
use client_frontend_core::MessageLog;

/// Everything a frame needs to draw.
pub struct RenderContext<'a> {
    pub snapshot: &'a SessionSnapshot,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub console_height: u16,
}

/// Map panel width: 20 tiles, two columns each, plus borders.
const MAP_PANEL_WIDTH: u16 = 42;

/// Render a full frame.
///
/// Returns the screen rectangle of the map grid (inside the borders) so the
/// event loop can hit-test mouse clicks against it.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<Option<Rect>> {
    let mut map_area = None;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(ctx.console_height),
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.snapshot, ctx.app_state);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MAP_PANEL_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        map_area = widgets::map::render(frame, main[0], ctx.snapshot, ctx.app_state);
        widgets::unit_info::render(frame, main[1], ctx.snapshot);

        widgets::console::render(frame, chunks[2], ctx.messages);

        if let Some(menu) = &ctx.app_state.village {
            let area = centered_rect(44, 12, frame.area());
            widgets::village_menu::render(frame, area, menu);
        }
    })?;

    Ok(map_area)
}

/// Fixed-size rectangle centered in `r`, clamped to fit.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
