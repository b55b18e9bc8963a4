//! Test helpers
//!
//! Mock location source with per-level failure injection.

use async_trait::async_trait;
use geocascade_source::{City, Country, LocationSource, Result, SourceError};

pub struct MockLocationSource {
    fail_countries: bool,
    fail_regions: bool,
    fail_cities: bool,
}

impl MockLocationSource {
    pub fn new() -> Self {
        Self {
            fail_countries: false,
            fail_regions: false,
            fail_cities: false,
        }
    }

    pub fn failing_countries(mut self) -> Self {
        self.fail_countries = true;
        self
    }

    pub fn failing_regions(mut self) -> Self {
        self.fail_regions = true;
        self
    }

    #[allow(dead_code)]
    pub fn failing_cities(mut self) -> Self {
        self.fail_cities = true;
        self
    }
}

fn network_error() -> SourceError {
    SourceError::NetworkError {
        source: "mock".to_string(),
        detail: "connection refused".to_string(),
    }
}

#[async_trait]
impl LocationSource for MockLocationSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn countries(&self) -> Result<Vec<Country>> {
        if self.fail_countries {
            return Err(network_error());
        }
        Ok(vec![
            Country {
                code: "BE".to_string(),
                name: "Belgium".to_string(),
            },
            Country {
                code: "FR".to_string(),
                name: "France".to_string(),
            },
        ])
    }

    async fn regions(&self, country_code: &str) -> Result<Vec<geocascade_source::Region>> {
        if self.fail_regions {
            return Err(network_error());
        }
        if country_code != "FR" {
            return Ok(vec![]);
        }
        Ok(vec![
            geocascade_source::Region {
                code: "11".to_string(),
                name: "Île-de-France".to_string(),
            },
            geocascade_source::Region {
                code: "32".to_string(),
                name: "Hauts-de-France".to_string(),
            },
        ])
    }

    async fn cities(&self, country_code: &str, region_code: &str) -> Result<Vec<City>> {
        if self.fail_cities {
            return Err(network_error());
        }
        if country_code != "FR" || region_code != "11" {
            return Ok(vec![]);
        }
        Ok(vec![
            City {
                id: 2_988_507,
                name: "Paris".to_string(),
            },
            City {
                id: 2_971_041,
                name: "Versailles".to_string(),
            },
        ])
    }
}
