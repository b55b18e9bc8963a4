//! Theme and style definitions

use ratatui::style::{Color, Modifier, Style};

/// Color scheme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// Current color scheme.
#[must_use]
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// Common styles.
pub struct Styles;

impl Styles {
    /// Title style
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Color::Rgb(212, 212, 212))
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    #[must_use]
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// Key hint style
    #[must_use]
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint description style
    #[must_use]
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
