//! Selected-unit panel.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use runtime::SessionSnapshot;

use client_frontend_core::UnitInfoView;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let block = Block::default().borders(Borders::ALL).title(" Unit ");

    let Some(info) = UnitInfoView::from_snapshot(snapshot) else {
        let placeholder = Paragraph::new("No unit selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("{} {}", info.kind, info.id),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(format!("HP: {}", info.health)),
        Line::from(format!("Movements: {}", info.remaining_moves)),
    ];
    if let Some(builds) = info.builds {
        lines.push(Line::from(format!("Builds: {builds}")));
    }
    if let Some(strength) = info.strength {
        lines.push(Line::from(format!("Strength: {strength}")));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
