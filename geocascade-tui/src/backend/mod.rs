//! Backend layer: config and background fetches

mod config;
mod fetcher;

pub use config::{load_config, AppConfig};
pub use fetcher::Fetcher;
