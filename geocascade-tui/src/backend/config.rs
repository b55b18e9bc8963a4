//! Configuration file handling
//!
//! Stored as JSON under the platform config directory, e.g.
//! `~/.config/geocascade/config.json` on Linux.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use geocascade_source::SourceConfig;

/// Default GeoNames account placeholder written into a fresh config.
const DEFAULT_GEONAMES_USERNAME: &str = "your_geonames_username";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which location source to use and its settings.
    pub source: SourceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::PublicApi {
                geonames_username: DEFAULT_GEONAMES_USERNAME.to_string(),
            },
        }
    }
}

/// Path of the config file, if a config directory exists on this platform.
fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("geocascade").join("config.json"))
}

/// Load the configuration, writing a default file on first run.
pub fn load_config() -> Result<AppConfig> {
    let Some(path) = config_path() else {
        log::warn!("no config directory on this platform, using defaults");
        return Ok(AppConfig::default());
    };

    if !path.exists() {
        let config = AppConfig::default();
        save_config(&config)?;
        log::info!("wrote default config to {}", path.display());
        return Ok(config);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

/// Persist the configuration.
pub fn save_config(config: &AppConfig) -> Result<()> {
    let Some(path) = config_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes_with_source_tag() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        assert!(json.contains("\"type\":\"public-api\""));
        assert!(json.contains(DEFAULT_GEONAMES_USERNAME));
    }

    #[test]
    fn backend_config_round_trips() {
        let json = r#"{"source":{"type":"backend","base_url":"http://localhost:5000"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        match config.source {
            SourceConfig::Backend { ref base_url } => {
                assert_eq!(base_url, "http://localhost:5000");
            }
            SourceConfig::PublicApi { .. } => panic!("wrong source variant"),
        }
    }
}
