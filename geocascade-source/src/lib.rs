//! # geocascade-source
//!
//! Location data source abstraction feeding the cascading
//! country → region → city selectors.
//!
//! ## Supported Sources
//!
//! | Source | Feature Flag | Upstream |
//! |--------|-------------|----------|
//! | `BackendSource` | `backend` | Local REST backend (`/location/...`) |
//! | `PublicApiSource` | `public-api` | restcountries.com + GeoNames |
//!
//! ## Feature Flags
//!
//! - **`all-sources`** *(default)*: enable both sources.
//! - **`backend`** / **`public-api`**: enable one source only.
//! - **`native-tls`** *(default)* / **`rustls`**: TLS backend selection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geocascade_source::{create_source, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(SourceConfig::PublicApi {
//!         geonames_username: "your_geonames_username".to_string(),
//!     });
//!
//!     let countries = source.countries().await?;
//!     for country in &countries {
//!         println!("{} {}", country.code, country.name);
//!     }
//!
//!     let regions = source.regions(&countries[0].code).await?;
//!     println!("{} regions", regions.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, SourceError>`](SourceError). Failures
//! are never retried; the cascade surfaces them as a placeholder option on
//! the affected selector.

mod error;
mod factory;
mod http_client;
mod sources;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{Result, SourceError};

// Re-export factory function
pub use factory::create_source;

// Re-export core trait
pub use traits::LocationSource;

// Re-export types
pub use types::{City, Country, Region, SourceConfig};

// Re-export concrete sources (behind feature flags)
#[cfg(feature = "backend")]
pub use sources::BackendSource;

#[cfg(feature = "public-api")]
pub use sources::PublicApiSource;
