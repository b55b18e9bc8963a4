//! `LocationSource` implementation for the local backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::sources::common::join_url;
use crate::traits::LocationSource;
use crate::types::{City, Country, Region};

use super::{BackendSource, SOURCE_ID};

impl BackendSource {
    /// Perform a GET against a location endpoint and parse the JSON array.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = join_url(&self.base_url, path);
        let (_, body) = HttpUtils::execute_request(self.client.get(&url), SOURCE_ID, &url).await?;
        HttpUtils::parse_json(&body, SOURCE_ID)
    }
}

#[async_trait]
impl LocationSource for BackendSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn countries(&self) -> Result<Vec<Country>> {
        // Sorted server-side (ORDER BY name)
        self.get_list("location/countries").await
    }

    async fn regions(&self, country_code: &str) -> Result<Vec<Region>> {
        self.get_list(&format!("location/regions/{country_code}"))
            .await
    }

    async fn cities(&self, country_code: &str, region_code: &str) -> Result<Vec<City>> {
        // Ordered by population server-side; kept as returned
        self.get_list(&format!("location/cities/{country_code}/{region_code}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_matches_backend_rows() {
        let body = r#"[{"code":"11","name":"Île-de-France"},{"code":"32","name":"Hauts-de-France"}]"#;
        let regions: Vec<Region> = HttpUtils::parse_json(body, SOURCE_ID).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].code, "11");
        assert_eq!(regions[0].name, "Île-de-France");
    }

    #[test]
    fn city_ids_are_numeric() {
        let body = r#"[{"id":2988507,"name":"Paris"},{"id":2995469,"name":"Marseille"}]"#;
        let cities: Vec<City> = HttpUtils::parse_json(body, SOURCE_ID).unwrap();
        assert_eq!(cities[0].id, 2_988_507);
        assert_eq!(cities[1].name, "Marseille");
    }
}
