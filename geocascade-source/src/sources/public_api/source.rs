//! `LocationSource` implementation over restcountries + GeoNames.

use async_trait::async_trait;

use crate::error::{Result, SourceError};
use crate::http_client::HttpUtils;
use crate::traits::LocationSource;
use crate::types::{City, Country, Region};

use super::{
    GEONAMES_MAX_ROWS, GEONAMES_SEARCH_URL, GeonamesResponse, PublicApiSource, RESTCOUNTRIES_URL,
    RestCountry, SOURCE_ID,
};

impl PublicApiSource {
    /// Run a GeoNames search and unwrap its in-band status envelope.
    async fn geonames_search(&self, params: &[(&str, &str)]) -> Result<GeonamesResponse> {
        let request = self
            .client
            .get(GEONAMES_SEARCH_URL)
            .query(params)
            .query(&[
                ("maxRows", GEONAMES_MAX_ROWS),
                ("username", self.geonames_username.as_str()),
            ]);

        let (_, body) =
            HttpUtils::execute_request(request, SOURCE_ID, GEONAMES_SEARCH_URL).await?;
        let response: GeonamesResponse = HttpUtils::parse_json(&body, SOURCE_ID)?;

        if let Some(status) = &response.status {
            return Err(map_geonames_status(status.value, &status.message));
        }
        Ok(response)
    }
}

#[async_trait]
impl LocationSource for PublicApiSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn countries(&self) -> Result<Vec<Country>> {
        let request = self
            .client
            .get(RESTCOUNTRIES_URL)
            .query(&[("fields", "cca2,name")]);

        let (_, body) = HttpUtils::execute_request(request, SOURCE_ID, RESTCOUNTRIES_URL).await?;
        let entries: Vec<RestCountry> = HttpUtils::parse_json(&body, SOURCE_ID)?;

        // restcountries returns in no particular order
        Ok(sort_countries(entries))
    }

    async fn regions(&self, country_code: &str) -> Result<Vec<Region>> {
        let response = self
            .geonames_search(&[("country", country_code), ("featureCode", "ADM1")])
            .await?;

        Ok(response
            .geonames
            .into_iter()
            .map(|entry| Region {
                // ADM1 results always carry their own admin code; fall back
                // to the geoname id for the rare bare entry
                code: entry
                    .admin_code1
                    .unwrap_or_else(|| entry.geoname_id.to_string()),
                name: entry.name,
            })
            .collect())
    }

    async fn cities(&self, country_code: &str, region_code: &str) -> Result<Vec<City>> {
        let response = self
            .geonames_search(&[
                ("country", country_code),
                ("adminCode1", region_code),
                ("featureClass", "P"),
            ])
            .await?;

        Ok(response
            .geonames
            .into_iter()
            .map(|entry| City {
                id: entry.geoname_id,
                name: entry.name,
            })
            .collect())
    }
}

/// Convert restcountries entries to sorted `Country` values.
fn sort_countries(entries: Vec<RestCountry>) -> Vec<Country> {
    let mut countries: Vec<Country> = entries
        .into_iter()
        .map(|entry| Country {
            code: entry.cca2,
            name: entry.name.common,
        })
        .collect();
    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
}

/// Map a GeoNames in-band status code to a structured error.
fn map_geonames_status(value: u32, message: &str) -> SourceError {
    match value {
        10 => SourceError::InvalidCredentials {
            source: SOURCE_ID.to_string(),
            raw_message: Some(message.to_string()),
        },
        18 | 19 | 20 => SourceError::RateLimited {
            source: SOURCE_ID.to_string(),
            retry_after: None,
            raw_message: Some(message.to_string()),
        },
        _ => SourceError::Unknown {
            source: SOURCE_ID.to_string(),
            raw_code: Some(value.to_string()),
            raw_message: message.to_string(),
        },
    }
}
