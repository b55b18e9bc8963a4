//! View layer: UI rendering

mod form;
mod modal;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

/// Render the whole UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // title
            Constraint::Min(12),    // form
            Constraint::Length(1),  // status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        " GeoCascade location picker",
        theme::Styles::title(),
    )));
    frame.render_widget(title, chunks[0]);

    form::render(app, frame, chunks[1]);
    render_statusbar(app, frame, chunks[2]);

    // Modal is drawn last, on top of everything
    modal::render(app, frame);
}

fn render_statusbar(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = match app.status_message {
        Some(ref msg) => Line::from(Span::raw(format!(" {msg}"))),
        None => Line::from(vec![
            Span::styled(" Tab", theme::Styles::hint_key()),
            Span::styled(" focus  ", theme::Styles::hint_desc()),
            Span::styled("↑↓", theme::Styles::hint_key()),
            Span::styled(" change  ", theme::Styles::hint_desc()),
            Span::styled("Backspace", theme::Styles::hint_key()),
            Span::styled(" clear  ", theme::Styles::hint_desc()),
            Span::styled("r", theme::Styles::hint_key()),
            Span::styled(" reload  ", theme::Styles::hint_desc()),
            Span::styled("q", theme::Styles::hint_key()),
            Span::styled(" quit", theme::Styles::hint_desc()),
        ]),
    };
    frame.render_widget(Paragraph::new(line).style(theme::Styles::statusbar()), area);
}
