//! Location data service
//!
//! Thin layer over a [`LocationSource`] that converts wire types into
//! selector options and applies the error policy: country fetch failures
//! degrade to the static fallback list, region and city failures propagate
//! so the cascade can show them.

use std::sync::Arc;

use geocascade_source::LocationSource;

use crate::error::CoreResult;
use crate::fallback::fallback_countries;
use crate::types::SelectorOption;

/// Location data service.
pub struct LocationService {
    source: Arc<dyn LocationSource>,
}

impl LocationService {
    #[must_use]
    pub fn new(source: Arc<dyn LocationSource>) -> Self {
        Self { source }
    }

    /// Identifier of the underlying source, for logging.
    #[must_use]
    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    /// Load the country list, sorted by name.
    ///
    /// Infallible: on fetch failure the static fallback list is returned
    /// and the error is logged.
    pub async fn load_countries(&self) -> Vec<SelectorOption> {
        match self.source.countries().await {
            Ok(countries) => countries.into_iter().map(SelectorOption::from).collect(),
            Err(e) => {
                if e.is_expected() {
                    log::warn!(
                        "country fetch via '{}' failed, using fallback list: {}",
                        self.source.id(),
                        e
                    );
                } else {
                    log::error!(
                        "country fetch via '{}' failed, using fallback list: {}",
                        self.source.id(),
                        e
                    );
                }
                fallback_countries()
            }
        }
    }

    /// Load the regions of a country.
    pub async fn load_regions(&self, country_code: &str) -> CoreResult<Vec<SelectorOption>> {
        let regions = self.source.regions(country_code).await?;
        Ok(regions.into_iter().map(SelectorOption::from).collect())
    }

    /// Load the cities of (country, region).
    pub async fn load_cities(
        &self,
        country_code: &str,
        region_code: &str,
    ) -> CoreResult<Vec<SelectorOption>> {
        let cities = self.source.cities(country_code, region_code).await?;
        Ok(cities.into_iter().map(SelectorOption::from).collect())
    }
}
