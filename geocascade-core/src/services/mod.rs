//! Service layer

mod cascade_service;
mod location_service;

pub use cascade_service::CascadeController;
pub use location_service::LocationService;
