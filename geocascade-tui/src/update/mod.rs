//! Update layer: consumes messages and mutates the model

use geocascade_core::SelectorState;

use crate::backend::Fetcher;
use crate::message::{AppMessage, LoadResult, ModalMessage};
use crate::model::{App, FocusField, Modal};

/// Apply one message to the application state.
pub fn update(app: &mut App, msg: AppMessage, fetcher: &Fetcher) {
    match msg {
        AppMessage::Quit => app.should_quit = true,

        AppMessage::FocusNext => app.focus = app.focus.next(),
        AppMessage::FocusPrev => app.focus = app.focus.prev(),

        AppMessage::OptionNext => change_selection(app, fetcher, 1),
        AppMessage::OptionPrev => change_selection(app, fetcher, -1),
        AppMessage::ClearSelection => apply_selection(app, fetcher, None),

        AppMessage::Reload => {
            app.cascade = geocascade_core::Cascade::new();
            app.cascade.begin_countries_load();
            app.status_message = Some("Reloading countries...".to_string());
            fetcher.load_countries();
        }

        AppMessage::Modal(modal_msg) => update_modal(app, modal_msg),

        AppMessage::Loaded(result) => apply_load_result(app, result),

        AppMessage::Noop => {}
    }
}

/// Step the focused selector one option forward or back.
fn change_selection(app: &mut App, fetcher: &Fetcher, delta: i32) {
    let selector = app.cascade.selector(app.focus.level());
    let Some(target) = step(selector, delta) else {
        return;
    };
    apply_selection(app, fetcher, target);
}

/// Route a new value for the focused field through the cascade.
fn apply_selection(app: &mut App, fetcher: &Fetcher, value: Option<String>) {
    let value = value.as_deref();
    match app.focus {
        FocusField::Country => {
            if let Some(request) = app.cascade.select_country(value) {
                fetcher.dispatch(request);
            }
        }
        FocusField::Region => {
            if let Some(request) = app.cascade.select_region(value) {
                fetcher.dispatch(request);
            }
        }
        FocusField::City => app.cascade.select_city(value),
        FocusField::Zone => {
            if app.cascade.select_zone(value) {
                app.modal.open_manual_zone();
            }
        }
    }
}

/// Compute the value one step away from the current selection.
///
/// `Ok(None)` in the inner option means the placeholder. Returns `None`
/// when no move is possible (disabled selector, empty list, at an edge).
fn step(selector: &SelectorState, delta: i32) -> Option<Option<String>> {
    if !selector.enabled || selector.options.is_empty() {
        return None;
    }

    let current = selector
        .value
        .as_deref()
        .and_then(|v| selector.options.iter().position(|o| o.value == v));

    let target = match (current, delta) {
        (None, d) if d > 0 => Some(0),
        (None, _) => return None,
        (Some(0), d) if d < 0 => None,
        (Some(i), d) if d < 0 => Some(i - 1),
        (Some(i), _) if i + 1 < selector.options.len() => Some(i + 1),
        (Some(_), _) => return None,
    };

    Some(target.map(|i| selector.options[i].value.clone()))
}

/// Manual zone input handling.
fn update_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.cascade.apply_manual_zone(None);
            app.modal.close();
        }
        ModalMessage::Confirm => {
            if let Some(Modal::ManualZone { input }) = app.modal.active.take() {
                app.cascade.apply_manual_zone(Some(&input));
            }
        }
        ModalMessage::Input(c) => {
            if let Some(Modal::ManualZone { ref mut input }) = app.modal.active {
                input.push(c);
            }
        }
        ModalMessage::Backspace => {
            if let Some(Modal::ManualZone { ref mut input }) = app.modal.active {
                input.pop();
            }
        }
    }
}

fn apply_load_result(app: &mut App, result: LoadResult) {
    match result {
        LoadResult::Countries(options) => {
            app.cascade.apply_countries(options);
            app.status_message = None;
        }
        LoadResult::Regions(result) => {
            app.status_message = result
                .as_ref()
                .err()
                .map(|e| format!("Region load failed: {e}"));
            app.cascade.apply_regions(result);
        }
        LoadResult::Cities(result) => {
            app.status_message = result
                .as_ref()
                .err()
                .map(|e| format!("City load failed: {e}"));
            app.cascade.apply_cities(result);
        }
    }
}
