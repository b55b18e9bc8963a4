//! Public API wire formats

use serde::Deserialize;

// ============ restcountries.com ============

/// One entry of `GET /v3.1/all?fields=cca2,name`.
#[derive(Debug, Deserialize)]
pub(crate) struct RestCountry {
    /// ISO 3166-1 alpha-2 code.
    pub cca2: String,
    pub name: RestCountryName,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RestCountryName {
    /// Common (short) display name.
    pub common: String,
}

// ============ GeoNames ============

/// Envelope of `GET /searchJSON`.
///
/// On success `geonames` is populated; on failure GeoNames still answers
/// HTTP 200 but sets `status` instead.
#[derive(Debug, Deserialize)]
pub(crate) struct GeonamesResponse {
    #[serde(default)]
    pub geonames: Vec<GeonamesEntry>,
    pub status: Option<GeonamesStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeonamesEntry {
    #[serde(rename = "geonameId")]
    pub geoname_id: i64,
    pub name: String,
    /// Admin1 code within the country; present on ADM1 results.
    #[serde(rename = "adminCode1")]
    pub admin_code1: Option<String>,
}

/// GeoNames in-band error status.
#[derive(Debug, Deserialize)]
pub(crate) struct GeonamesStatus {
    pub message: String,
    /// Numeric status code: 10 = invalid credentials, 18/19/20 = daily /
    /// hourly / weekly credit limit.
    pub value: u32,
}
