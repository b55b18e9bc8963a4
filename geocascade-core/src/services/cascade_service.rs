//! Cascade controller
//!
//! Sequential driver pairing a [`Cascade`] with a [`LocationService`].
//! Every selection change awaits its fetch before returning, so results
//! never interleave. Drivers that want overlapping fetches (the TUI) use
//! [`Cascade`] directly and route results through their own channel.

use crate::cascade::{Cascade, LoadRequest};
use crate::services::LocationService;

/// Sequential cascade driver.
pub struct CascadeController {
    cascade: Cascade,
    service: LocationService,
}

impl CascadeController {
    #[must_use]
    pub fn new(service: LocationService) -> Self {
        Self {
            cascade: Cascade::new(),
            service,
        }
    }

    /// Read access to the cascade state, for rendering.
    #[must_use]
    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    /// Fetch and install the country list (startup).
    pub async fn load_countries(&mut self) {
        self.cascade.begin_countries_load();
        let options = self.service.load_countries().await;
        self.cascade.apply_countries(options);
    }

    /// Select a country (or clear it with `None`) and load its regions.
    pub async fn country_changed(&mut self, code: Option<&str>) {
        if let Some(LoadRequest::Regions { country }) = self.cascade.select_country(code) {
            let result = self.service.load_regions(&country).await;
            self.cascade.apply_regions(result);
        }
    }

    /// Select a region (or clear it) and load its cities.
    pub async fn region_changed(&mut self, code: Option<&str>) {
        if let Some(LoadRequest::Cities { country, region }) = self.cascade.select_region(code) {
            let result = self.service.load_cities(&country, &region).await;
            self.cascade.apply_cities(result);
        }
    }

    /// Select a city (or clear it); enables the zone selector.
    pub fn city_changed(&mut self, id: Option<&str>) {
        self.cascade.select_city(id);
    }

    /// Select a zone option. Returns `true` when the manual-entry option
    /// was chosen and the caller must collect free text.
    pub fn zone_selected(&mut self, value: Option<&str>) -> bool {
        self.cascade.select_zone(value)
    }

    /// Complete or cancel a manual zone entry.
    pub fn zone_manual_entry(&mut self, input: Option<&str>) {
        self.cascade.apply_manual_zone(input);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cascade::{ERROR_LOADING, MANUAL_ENTRY_LABEL};
    use crate::test_utils::MockLocationSource;
    use crate::types::MANUAL_ENTRY_VALUE;

    fn controller(source: MockLocationSource) -> CascadeController {
        CascadeController::new(LocationService::new(Arc::new(source)))
    }

    #[tokio::test]
    async fn full_chain_down_to_manual_zone() {
        let mut ctl = controller(MockLocationSource::new());
        ctl.load_countries().await;
        assert!(ctl.cascade().country.enabled);

        ctl.country_changed(Some("FR")).await;
        assert!(ctl.cascade().region.enabled);

        ctl.region_changed(Some("11")).await;
        assert!(ctl.cascade().city.enabled);

        ctl.city_changed(Some("2988507"));
        assert!(ctl.cascade().zone.enabled);
        assert_eq!(ctl.cascade().zone.options[0].label, MANUAL_ENTRY_LABEL);

        assert!(ctl.zone_selected(Some(MANUAL_ENTRY_VALUE)));
        ctl.zone_manual_entry(Some("Quartier Latin"));
        assert_eq!(ctl.cascade().zone.value.as_deref(), Some("Quartier Latin"));
    }

    #[tokio::test]
    async fn country_fetch_failure_falls_back() {
        let mut ctl = controller(MockLocationSource::new().failing_countries());
        ctl.load_countries().await;
        assert!(ctl.cascade().country.enabled);
        assert!(!ctl.cascade().country.options.is_empty());
    }

    #[tokio::test]
    async fn region_fetch_failure_disables_selector() {
        let mut ctl = controller(MockLocationSource::new().failing_regions());
        ctl.load_countries().await;
        ctl.country_changed(Some("FR")).await;

        assert!(!ctl.cascade().region.enabled);
        assert_eq!(ctl.cascade().region.display_label(), ERROR_LOADING);
    }

    #[tokio::test]
    async fn clearing_country_skips_fetch_and_resets() {
        let mut ctl = controller(MockLocationSource::new());
        ctl.load_countries().await;
        ctl.country_changed(Some("FR")).await;
        ctl.region_changed(Some("11")).await;

        ctl.country_changed(None).await;
        assert!(!ctl.cascade().region.enabled);
        assert!(!ctl.cascade().city.enabled);
    }
}
