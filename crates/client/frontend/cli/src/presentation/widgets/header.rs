//! Header widget: resource balances, turn counter, submission indicator.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use runtime::{SessionSnapshot, SubmissionState};

use crate::state::AppState;
use client_frontend_core::ResourceView;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, app_state: &AppState) {
    let resources = ResourceView::from_snapshot(snapshot);

    let mut spans = vec![
        Span::raw("Turn "),
        Span::styled(
            resources.turn.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Gold "),
        Span::styled(
            resources.gold.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Food "),
        Span::styled(
            resources.food.to_string(),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | Lumber "),
        Span::styled(
            resources.lumber.to_string(),
            Style::default().fg(Color::LightRed),
        ),
    ];

    if app_state.waiting || snapshot.submission == SubmissionState::Submitting {
        spans.push(Span::styled(
            " [SUBMITTING...]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    } else if snapshot.submission == SubmissionState::Failed {
        spans.push(Span::styled(
            " [REJECTED]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        "   move: arrows/hjkl  click: enter  end turn: e  refresh: r  quit: q",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title(" GridCiv "));

    frame.render_widget(paragraph, area);
}
