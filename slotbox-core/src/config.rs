//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! { "registryFile": "data.json", "logging": true }
//! ```
//! An absent or malformed settings file falls back to defaults.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Slotbox configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// File name of the registration directory, relative to the data dir
    pub registry_file: String,
    /// Whether command events are written to the event log
    pub logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_file: "data.json".to_string(),
            logging: true,
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Logging can be disabled via the settings file or, for CI and
    /// testing, via the `SLOTBOX_LOGGING` environment variable.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let mut config: Config = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            Config::default()
        };

        match std::env::var("SLOTBOX_LOGGING").ok().as_deref() {
            Some("true" | "1" | "yes") => config.logging = true,
            Some("false" | "0" | "no") => config.logging = false,
            _ => {}
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.registry_file, "data.json");
        assert!(config.logging);
    }

    #[test]
    fn test_settings_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("settings.json"),
            r#"{ "registryFile": "players.json", "logging": false }"#,
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.registry_file, "players.json");
        assert!(!config.logging);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("settings.json"), "{ not json").unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.registry_file, "data.json");
    }
}
