//! Event handlers

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage};
use crate::model::App;

/// Poll for an input event, waiting at most `timeout`.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize triggers a redraw on the next loop iteration anyway
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press events; Release and Repeat cause double input on Windows
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open modal captures all input
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Reload;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    if DefaultKeymap::FOCUS_PREV.matches(&key) {
        return AppMessage::FocusPrev;
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::ClearSelection;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => AppMessage::OptionNext,
        KeyCode::Up | KeyCode::Char('k') => AppMessage::OptionPrev,
        _ => AppMessage::Noop,
    }
}

/// Key handling while the manual zone input is open.
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c) => AppMessage::Modal(ModalMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}
