//! Location source implementations

/// Shared utilities used by source implementations.
pub mod common;

#[cfg(feature = "backend")]
mod backend;
#[cfg(feature = "public-api")]
mod public_api;

#[cfg(feature = "backend")]
pub use backend::BackendSource;
#[cfg(feature = "public-api")]
pub use public_api::PublicApiSource;
