//! Local backend source integration tests
//!
//! Run with:
//! ```bash
//! GEOCASCADE_API_BASE=http://127.0.0.1:5000 \
//!     cargo test -p geocascade-source --test backend_test -- --ignored --nocapture
//! ```

mod common;

use common::BACKEND_BASE_VAR;
use geocascade_source::{BackendSource, LocationSource};

fn backend() -> BackendSource {
    let base = std::env::var(BACKEND_BASE_VAR).unwrap_or_default();
    BackendSource::new(base)
}

#[tokio::test]
#[ignore = "integration test: requires GEOCASCADE_API_BASE"]
async fn backend_countries_sorted() {
    skip_if_no_env!(BACKEND_BASE_VAR);

    let source = backend();
    let countries = require_ok!(source.countries().await, "countries fetch failed");
    assert!(!countries.is_empty(), "country list should not be empty");

    let mut sorted = countries.clone();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(countries, sorted, "backend should serve countries sorted by name");

    println!("✓ countries: {} entries", countries.len());
}

#[tokio::test]
#[ignore = "integration test: requires GEOCASCADE_API_BASE"]
async fn backend_region_city_chain() {
    skip_if_no_env!(BACKEND_BASE_VAR);

    let source = backend();
    let regions = require_ok!(source.regions("FR").await, "regions fetch failed");
    assert!(!regions.is_empty(), "FR should have regions");

    let cities = require_ok!(
        source.cities("FR", &regions[0].code).await,
        "cities fetch failed"
    );
    println!(
        "✓ {} cities in {} ({})",
        cities.len(),
        regions[0].name,
        regions[0].code
    );
}
