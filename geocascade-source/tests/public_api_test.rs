//! Public API source integration tests
//!
//! Run with:
//! ```bash
//! GEONAMES_USERNAME=your_user \
//!     cargo test -p geocascade-source --test public_api_test -- --ignored --nocapture
//! ```

mod common;

use common::GEONAMES_USER_VAR;
use geocascade_source::{LocationSource, PublicApiSource, SourceError};

fn public_api() -> PublicApiSource {
    let username = std::env::var(GEONAMES_USER_VAR).unwrap_or_default();
    PublicApiSource::new(username)
}

#[tokio::test]
#[ignore = "integration test: hits restcountries.com"]
async fn public_api_countries_sorted() {
    let source = public_api();
    let countries = require_ok!(source.countries().await, "countries fetch failed");
    assert!(countries.len() > 100, "restcountries should list the world");

    let mut sorted = countries.clone();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(countries, sorted, "countries should be sorted client-side");

    println!("✓ countries: {} entries", countries.len());
}

#[tokio::test]
#[ignore = "integration test: requires GEONAMES_USERNAME"]
async fn public_api_region_city_chain() {
    skip_if_no_env!(GEONAMES_USER_VAR);

    let source = public_api();
    let regions = require_ok!(source.regions("FR").await, "regions fetch failed");
    assert!(!regions.is_empty(), "FR should have admin1 divisions");

    let cities = require_ok!(
        source.cities("FR", &regions[0].code).await,
        "cities fetch failed"
    );
    assert!(cities.len() <= 100, "maxRows cap");
    println!("✓ {} cities in {}", cities.len(), regions[0].name);
}

#[tokio::test]
#[ignore = "integration test: hits api.geonames.org"]
async fn public_api_bad_username_is_structured() {
    let source = PublicApiSource::new("definitely-not-a-geonames-user-42".to_string());
    let result = source.regions("FR").await;
    assert!(
        matches!(result, Err(SourceError::InvalidCredentials { .. })),
        "unexpected result: {result:?}"
    );
    println!("✓ invalid username mapped to InvalidCredentials");
}
