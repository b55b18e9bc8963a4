//! Source factory functions.

use std::sync::Arc;

use crate::traits::LocationSource;
use crate::types::SourceConfig;

#[cfg(feature = "backend")]
use crate::sources::BackendSource;
#[cfg(feature = "public-api")]
use crate::sources::PublicApiSource;

/// Creates a [`LocationSource`] instance from the given configuration.
///
/// The concrete source type is determined by the [`SourceConfig`] variant.
/// The returned source is wrapped in `Arc<dyn LocationSource>` for sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use geocascade_source::{create_source, SourceConfig};
///
/// let source = create_source(SourceConfig::Backend {
///     base_url: "http://127.0.0.1:5000".to_string(),
/// });
/// ```
#[must_use]
pub fn create_source(config: SourceConfig) -> Arc<dyn LocationSource> {
    match config {
        #[cfg(feature = "backend")]
        SourceConfig::Backend { base_url } => Arc::new(BackendSource::new(base_url)),
        #[cfg(feature = "public-api")]
        SourceConfig::PublicApi { geonames_username } => {
            Arc::new(PublicApiSource::new(geonames_username))
        }
    }
}
