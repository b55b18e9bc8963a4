//! Single selector widget state

use crate::types::{SelectorOption, SelectorStatus};

/// State of one dropdown-like selector.
///
/// Mirrors what a form widget exposes: an option list, the current value,
/// an enabled flag, and placeholder text shown when nothing is selected.
/// A selector is enabled exactly when it holds valid options (the zone is
/// the exception, enabled as soon as a city is chosen).
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    /// Available options, placeholder excluded.
    pub options: Vec<SelectorOption>,
    /// Currently selected option value; `None` means the placeholder.
    pub value: Option<String>,
    /// Whether the widget accepts input.
    pub enabled: bool,
    /// Load status.
    pub status: SelectorStatus,
    /// Placeholder text (the index-0 pseudo option).
    pub placeholder: String,
}

impl SelectorState {
    /// Create a cleared, disabled selector with the given placeholder.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Clear options and selection, disable, and show `placeholder`.
    pub fn reset(&mut self, placeholder: impl Into<String>) {
        self.options.clear();
        self.value = None;
        self.enabled = false;
        self.status = SelectorStatus::Idle;
        self.placeholder = placeholder.into();
    }

    /// Enter the loading state (disabled until the result arrives).
    pub fn mark_loading(&mut self, placeholder: impl Into<String>) {
        self.options.clear();
        self.value = None;
        self.enabled = false;
        self.status = SelectorStatus::Loading;
        self.placeholder = placeholder.into();
    }

    /// Replace the options and enable the widget.
    pub fn populate(&mut self, options: Vec<SelectorOption>, placeholder: impl Into<String>) {
        self.options = options;
        self.value = None;
        self.enabled = true;
        self.status = SelectorStatus::Ready;
        self.placeholder = placeholder.into();
    }

    /// Record a successful fetch that returned nothing: disabled, with an
    /// explanatory placeholder instead of an empty dropdown.
    pub fn mark_empty(&mut self, placeholder: impl Into<String>) {
        self.options.clear();
        self.value = None;
        self.enabled = false;
        self.status = SelectorStatus::Ready;
        self.placeholder = placeholder.into();
    }

    /// Enter the failed state with an error placeholder, disabled.
    pub fn fail(&mut self, placeholder: impl Into<String>) {
        self.options.clear();
        self.value = None;
        self.enabled = false;
        self.status = SelectorStatus::Failed;
        self.placeholder = placeholder.into();
    }

    /// Select an option by value; `None` reverts to the placeholder.
    ///
    /// Returns `false` (leaving the state untouched) when the widget is
    /// disabled or the value is not in the option list.
    pub fn select(&mut self, value: Option<&str>) -> bool {
        match value {
            None => {
                self.value = None;
                true
            }
            Some(v) => {
                if !self.enabled || !self.options.iter().any(|o| o.value == v) {
                    return false;
                }
                self.value = Some(v.to_string());
                true
            }
        }
    }

    /// Revert the selection to the placeholder (index 0).
    pub fn clear_selection(&mut self) {
        self.value = None;
    }

    /// The currently selected option, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&SelectorOption> {
        let value = self.value.as_deref()?;
        self.options.iter().find(|o| o.value == value)
    }

    /// Display label of the current selection, or the placeholder.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.selected_option()
            .map_or(self.placeholder.as_str(), |o| o.label.as_str())
    }
}
