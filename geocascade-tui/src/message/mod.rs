//! Message layer
//!
//! Everything the update layer can be asked to do, produced either by the
//! event layer (key presses) or by the backend (fetch completions).

use geocascade_core::{CoreResult, SelectorOption};

/// Top-level message type.
#[derive(Debug)]
pub enum AppMessage {
    /// Exit the application.
    Quit,
    /// Move focus to the next form field.
    FocusNext,
    /// Move focus to the previous form field.
    FocusPrev,
    /// Select the next option in the focused selector.
    OptionNext,
    /// Select the previous option (or the placeholder) in the focused selector.
    OptionPrev,
    /// Revert the focused selector to its placeholder.
    ClearSelection,
    /// Restart the cascade from a fresh country fetch.
    Reload,
    /// Modal input.
    Modal(ModalMessage),
    /// A background fetch completed.
    Loaded(LoadResult),
    /// Nothing to do.
    Noop,
}

/// Messages while a modal is open.
#[derive(Debug)]
pub enum ModalMessage {
    /// Dismiss without applying (Esc).
    Close,
    /// Apply the current input (Enter).
    Confirm,
    /// Append a character to the input.
    Input(char),
    /// Delete the last character.
    Backspace,
}

/// Completed fetch payloads, tagged by selector level.
#[derive(Debug)]
pub enum LoadResult {
    /// Country fetch never fails upward; fallback already applied.
    Countries(Vec<SelectorOption>),
    Regions(CoreResult<Vec<SelectorOption>>),
    Cities(CoreResult<Vec<SelectorOption>>),
}
