//! GeoCascade Core Library
//!
//! Business logic for the cascading location form, including:
//! - Cascade state machine (country, region, city, zone)
//! - Location data service over pluggable sources
//! - Sequential cascade controller
//!
//! This library is frontend-independent: the state machine is pure and
//! synchronous, fetches are driven by the caller. The bundled TUI and any
//! other frontend render from the same [`Cascade`] state.

pub mod cascade;
pub mod error;
pub mod fallback;
pub mod selector;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cascade::{Cascade, LoadRequest};
pub use error::{CoreError, CoreResult};
pub use selector::SelectorState;
pub use services::{CascadeController, LocationService};
pub use types::{SelectorLevel, SelectorOption, SelectorStatus, MANUAL_ENTRY_VALUE};
