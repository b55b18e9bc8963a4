//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One key binding.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether a key event matches this binding.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings.
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const RELOAD: KeyBinding = KeyBinding::key(KeyCode::Char('r'));

    // Form
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    // Terminals report Shift+Tab as BackTab with the SHIFT modifier set.
    pub const FOCUS_PREV: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);
    pub const CLEAR: KeyBinding = KeyBinding::key(KeyCode::Backspace);
}
