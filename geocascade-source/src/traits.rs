use async_trait::async_trait;

use crate::error::Result;
use crate::types::{City, Country, Region};

/// Location data source trait.
///
/// One implementation per upstream (local backend, public APIs). Each method
/// performs a single fetch with no retry; callers surface failures as
/// placeholder text and wait for the user to re-select the ancestor field.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Source identifier, used in error context and logs.
    fn id(&self) -> &'static str;

    /// List all countries.
    ///
    /// Implementations return the list sorted by display name, either
    /// because the upstream already sorts (the backend's `ORDER BY name`)
    /// or by sorting client-side.
    async fn countries(&self) -> Result<Vec<Country>>;

    /// List first-level administrative divisions of a country.
    async fn regions(&self, country_code: &str) -> Result<Vec<Region>>;

    /// List cities within (country, region). Order is upstream-defined
    /// (the backend orders by population, GeoNames by relevance).
    async fn cities(&self, country_code: &str, region_code: &str) -> Result<Vec<City>>;
}
