//! Shared types for location sources.

use serde::{Deserialize, Serialize};

/// A country entry: ISO 3166-1 alpha-2 code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g. `"FR"`).
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A first-level administrative division (state, province, région).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Admin1 code, unique within its country (e.g. `"11"` for
    /// Île-de-France).
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A populated place within a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Stable numeric identifier (the GeoNames `geonameid`).
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Configuration selecting and parameterizing a concrete source.
///
/// Passed to [`create_source`](crate::create_source); the variant determines
/// the implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SourceConfig {
    /// Local backend exposing `GET {base_url}/location/...` endpoints.
    Backend {
        /// Base URL of the backend, without a trailing slash
        /// (e.g. `"http://127.0.0.1:5000"`).
        base_url: String,
    },
    /// Public APIs: restcountries.com for countries, GeoNames for regions
    /// and cities.
    PublicApi {
        /// GeoNames username. A free account is required; the default
        /// config ships a placeholder that GeoNames will reject.
        geonames_username: String,
    },
}
