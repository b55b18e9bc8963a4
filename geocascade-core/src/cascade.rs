//! The selector cascade state machine
//!
//! Pure, synchronous model of the four dependent selectors. Fetches happen
//! elsewhere; this module consumes selection changes and fetch results and
//! maintains the cascade invariant: any change to an ancestor's value
//! invalidates and disables every descendant until it is reloaded.
//!
//! Results are applied unconditionally. A driver that lets fetches overlap
//! (the TUI's background tasks) gets last-write-wins semantics; the
//! sequential [`CascadeController`](crate::services::CascadeController)
//! awaits each fetch and never interleaves.

use crate::error::CoreResult;
use crate::selector::SelectorState;
use crate::types::{MANUAL_ENTRY_VALUE, SelectorLevel, SelectorOption};

// Placeholder texts, one per selector state.
pub const PLACEHOLDER_COUNTRY: &str = "Select a country";
pub const PLACEHOLDER_REGION: &str = "Select a region";
pub const PLACEHOLDER_CITY: &str = "Select a city";
pub const PLACEHOLDER_ZONE: &str = "Select a zone";
pub const HINT_COUNTRY_FIRST: &str = "Select a country first";
pub const HINT_REGION_FIRST: &str = "Select a region first";
pub const HINT_CITY_FIRST: &str = "Select a city first";
pub const LOADING: &str = "Loading...";
pub const ERROR_LOADING: &str = "Error loading";
pub const NO_REGIONS: &str = "No regions found";
pub const NO_CITIES: &str = "No cities found";
pub const MANUAL_ENTRY_LABEL: &str = "Enter manually...";

/// A fetch the driver must perform after a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    /// Fetch the regions of a country.
    Regions { country: String },
    /// Fetch the cities of (country, region).
    Cities { country: String, region: String },
}

/// State of the four-level location cascade.
#[derive(Debug, Clone)]
pub struct Cascade {
    pub country: SelectorState,
    pub region: SelectorState,
    pub city: SelectorState,
    pub zone: SelectorState,
}

impl Cascade {
    /// Fresh cascade: everything empty, descendants hinting at their
    /// missing ancestor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            country: SelectorState::new(PLACEHOLDER_COUNTRY),
            region: SelectorState::new(HINT_COUNTRY_FIRST),
            city: SelectorState::new(HINT_REGION_FIRST),
            zone: SelectorState::new(HINT_CITY_FIRST),
        }
    }

    /// The selector at the given level, for level-keyed frontends.
    #[must_use]
    pub fn selector(&self, level: SelectorLevel) -> &SelectorState {
        match level {
            SelectorLevel::Country => &self.country,
            SelectorLevel::Region => &self.region,
            SelectorLevel::City => &self.city,
            SelectorLevel::Zone => &self.zone,
        }
    }

    // ========== Country ==========

    /// Mark the country selector as loading (startup fetch).
    pub fn begin_countries_load(&mut self) {
        self.country.mark_loading(LOADING);
    }

    /// Install the country options.
    ///
    /// Infallible: a failed country fetch is substituted with the static
    /// fallback list before reaching the cascade.
    pub fn apply_countries(&mut self, options: Vec<SelectorOption>) {
        self.country.populate(options, PLACEHOLDER_COUNTRY);
    }

    /// Handle a country selection change.
    ///
    /// Resets region, city and zone. Returns the region fetch to perform
    /// when a country was actually selected.
    pub fn select_country(&mut self, code: Option<&str>) -> Option<LoadRequest> {
        let code = normalize(code);
        if !self.country.select(code) {
            return None;
        }

        self.region.reset(HINT_COUNTRY_FIRST);
        self.city.reset(HINT_REGION_FIRST);
        self.zone.reset(HINT_CITY_FIRST);

        let country = code?.to_string();
        self.region.mark_loading(LOADING);
        Some(LoadRequest::Regions { country })
    }

    /// Apply a region fetch result. Stale results apply like fresh ones.
    pub fn apply_regions(&mut self, result: CoreResult<Vec<SelectorOption>>) {
        apply_fetch(&mut self.region, result, PLACEHOLDER_REGION, NO_REGIONS);
    }

    // ========== Region ==========

    /// Handle a region selection change; returns the city fetch to perform.
    pub fn select_region(&mut self, code: Option<&str>) -> Option<LoadRequest> {
        let code = normalize(code);
        if !self.region.select(code) {
            return None;
        }

        self.city.reset(HINT_REGION_FIRST);
        self.zone.reset(HINT_CITY_FIRST);

        let region = code?.to_string();
        let country = self.country.value.clone()?;
        self.city.mark_loading(LOADING);
        Some(LoadRequest::Cities { country, region })
    }

    /// Apply a city fetch result. Stale results apply like fresh ones.
    pub fn apply_cities(&mut self, result: CoreResult<Vec<SelectorOption>>) {
        apply_fetch(&mut self.city, result, PLACEHOLDER_CITY, NO_CITIES);
    }

    // ========== City ==========

    /// Handle a city selection change.
    ///
    /// The zone has no backing data source: selecting a city enables it
    /// with exactly one manual-entry option.
    pub fn select_city(&mut self, id: Option<&str>) {
        let id = normalize(id);
        if !self.city.select(id) {
            return;
        }

        self.zone.reset(HINT_CITY_FIRST);
        if id.is_some() {
            self.zone
                .populate(vec![manual_entry_option()], PLACEHOLDER_ZONE);
        }
    }

    // ========== Zone ==========

    /// Handle a zone selection change.
    ///
    /// Returns `true` when the manual-entry option was chosen: the caller
    /// must prompt for free text and feed it back through
    /// [`apply_manual_zone`](Self::apply_manual_zone).
    pub fn select_zone(&mut self, value: Option<&str>) -> bool {
        let value = normalize(value);
        if value == Some(MANUAL_ENTRY_VALUE) {
            return self.zone.enabled;
        }
        self.zone.select(value);
        false
    }

    /// Complete (or cancel) a manual zone entry.
    ///
    /// Non-empty input becomes a new selected option, inserted before the
    /// manual-entry option so it can be used again. Empty or cancelled
    /// input reverts the selection to the placeholder.
    pub fn apply_manual_zone(&mut self, input: Option<&str>) {
        if !self.zone.enabled {
            return;
        }

        let Some(text) = input.map(str::trim).filter(|t| !t.is_empty()) else {
            self.zone.clear_selection();
            return;
        };

        let option = SelectorOption::verbatim(text);
        let value = option.value.clone();
        let at = self
            .zone
            .options
            .iter()
            .position(|o| o.value == MANUAL_ENTRY_VALUE)
            .unwrap_or(self.zone.options.len());
        self.zone.options.insert(at, option);
        self.zone.value = Some(value);
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::new()
    }
}

/// The synthetic option that triggers manual zone entry.
#[must_use]
pub fn manual_entry_option() -> SelectorOption {
    SelectorOption::new(MANUAL_ENTRY_VALUE, MANUAL_ENTRY_LABEL)
}

/// Treat empty strings as no selection.
fn normalize(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Shared result application for region and city fetches.
fn apply_fetch(
    selector: &mut SelectorState,
    result: CoreResult<Vec<SelectorOption>>,
    placeholder: &str,
    empty_placeholder: &str,
) {
    match result {
        Ok(options) if options.is_empty() => selector.mark_empty(empty_placeholder),
        Ok(options) => selector.populate(options, placeholder),
        Err(_) => selector.fail(ERROR_LOADING),
    }
}
