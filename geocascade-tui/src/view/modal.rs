//! Modal rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme;

/// Render the active modal, if any.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ManualZone { input } => render_manual_zone(frame, input),
    }
}

/// Centered rect of the given size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_manual_zone(frame: &mut Frame, input: &str) {
    let colors = theme::colors();
    let area = centered_rect(44, 6, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Enter zone ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_focused))
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(input, Style::default().fg(colors.fg)),
            Span::styled("█", Style::default().fg(colors.highlight)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter", theme::Styles::hint_key()),
            Span::styled(" confirm  ", theme::Styles::hint_desc()),
            Span::styled("Esc", theme::Styles::hint_key()),
            Span::styled(" cancel", theme::Styles::hint_desc()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
