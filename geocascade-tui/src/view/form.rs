//! Cascade form rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use geocascade_core::{SelectorState, SelectorStatus};

use crate::model::{App, FocusField};
use crate::view::theme;

/// Render the four stacked selectors.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let fields = [
        (FocusField::Country, "Country"),
        (FocusField::Region, "Region"),
        (FocusField::City, "City"),
        (FocusField::Zone, "Zone"),
    ];

    for (i, (field, title)) in fields.into_iter().enumerate() {
        let selector = app.cascade.selector(field.level());
        render_selector(frame, chunks[i], title, selector, app.focus == field);
    }
}

fn render_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    selector: &SelectorState,
    focused: bool,
) {
    let colors = theme::colors();

    let border_style = if focused {
        Style::default().fg(colors.border_focused)
    } else {
        Style::default().fg(colors.border)
    };

    let value_style = match selector.status {
        SelectorStatus::Failed => Style::default().fg(colors.error),
        _ if !selector.enabled => Style::default().fg(colors.muted),
        _ if selector.value.is_some() => Style::default().fg(colors.fg),
        _ => Style::default().fg(colors.muted),
    };

    let arrows = if focused && selector.enabled {
        "  ↑↓"
    } else {
        ""
    };

    let line = Line::from(vec![
        Span::styled(format!(" {}", selector.display_label()), value_style),
        Span::styled(arrows, Style::default().fg(colors.highlight)),
    ]);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
