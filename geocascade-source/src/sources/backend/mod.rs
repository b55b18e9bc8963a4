//! Local backend location source
//!
//! Talks to a local REST backend exposing
//! `/location/countries`, `/location/regions/{cc}`,
//! `/location/cities/{cc}/{rc}`. The backend serves pre-sorted lists
//! (countries and regions by name, cities by population).

mod source;

use reqwest::Client;

use crate::sources::common::create_http_client;

pub(crate) const SOURCE_ID: &str = "backend";

/// Local backend location source
pub struct BackendSource {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl BackendSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: create_http_client(),
            base_url,
        }
    }
}
