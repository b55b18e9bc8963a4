//! Application state

use geocascade_core::Cascade;

use super::{FocusField, ModalState};

/// Top-level application state.
pub struct App {
    /// Whether the main loop should exit.
    pub should_quit: bool,
    /// Which form field has keyboard focus.
    pub focus: FocusField,
    /// The four-level selector cascade.
    pub cascade: Cascade,
    /// Active modal, if any.
    pub modal: ModalState,
    /// One-line message shown in the status bar.
    pub status_message: Option<String>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusField::default(),
            cascade: Cascade::new(),
            modal: ModalState::default(),
            status_message: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
