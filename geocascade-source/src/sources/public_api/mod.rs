//! Public API location source
//!
//! Countries come from restcountries.com (no credential, sorted client-side
//! since the upstream is unsorted); regions and cities come from the GeoNames
//! search API,
//! which needs a free-account username passed as a query parameter.

mod source;
mod types;

use reqwest::Client;

use crate::sources::common::create_http_client;

pub(crate) use types::{GeonamesResponse, RestCountry};

pub(crate) const SOURCE_ID: &str = "public-api";

pub(crate) const RESTCOUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";
pub(crate) const GEONAMES_SEARCH_URL: &str = "http://api.geonames.org/searchJSON";
/// GeoNames search cap; the form never pages.
pub(crate) const GEONAMES_MAX_ROWS: &str = "100";

/// Public API location source
pub struct PublicApiSource {
    pub(crate) client: Client,
    pub(crate) geonames_username: String,
}

impl PublicApiSource {
    pub fn new(geonames_username: String) -> Self {
        Self {
            client: create_http_client(),
            geonames_username,
        }
    }
}
