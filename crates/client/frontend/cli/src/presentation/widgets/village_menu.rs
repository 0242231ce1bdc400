//! Village construction menu overlay.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::VillageMenuState;
use client_frontend_core::construction_options;

pub fn render(frame: &mut Frame, area: Rect, menu: &VillageMenuState) {
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("Village {}", menu.position),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    for (index, option) in construction_options().iter().enumerate() {
        let marker = if index == menu.cursor { "> " } else { "  " };
        let style = if index == menu.cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}", option.title), style),
            Span::styled(
                format!("  ({} gold)", option.cost),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", option.description),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Construction "));

    frame.render_widget(paragraph, area);
}
