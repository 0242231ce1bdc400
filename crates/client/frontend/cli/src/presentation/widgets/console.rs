//! Console widget: recent session messages, newest at the bottom.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::{MessageLevel, MessageLog};

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = area.height.saturating_sub(2) as usize;

    let mut entries: Vec<_> = messages.recent(visible).collect();
    entries.reverse();

    let lines: Vec<Line> = entries
        .into_iter()
        .map(|entry| {
            let color = match entry.level {
                MessageLevel::Info => Color::White,
                MessageLevel::Warning => Color::Yellow,
                MessageLevel::Error => Color::Red,
            };
            Line::styled(entry.text.clone(), Style::default().fg(color))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Console "));

    frame.render_widget(paragraph, area);
}
