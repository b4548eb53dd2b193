//! Tool configuration, stored as TOML at `~/.config/privman/config`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Privman configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// `check` command behavior.
    #[serde(default)]
    pub check: CheckConfig,

    /// Catalog lookup behavior for user-supplied keys.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for the `check` command.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckConfig {
    /// Exit nonzero from `check` when any warning fires. Warnings stay
    /// advisory everywhere else.
    #[serde(default)]
    pub strict: bool,
}

/// Settings for catalog key resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Accept data-type, purpose and API keys that are not in the catalog.
    /// When false, unknown keys are rejected instead of warned about.
    #[serde(default = "default_allow_unknown")]
    pub allow_unknown: bool,
}

/// Unknown keys are accepted by default; custom keys are legal in manifests.
fn default_allow_unknown() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            allow_unknown: default_allow_unknown(),
        }
    }
}

impl Config {
    /// Load configuration from a file, creating a default one if it does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, created, or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directories cannot be created, the file
    /// cannot be written, or TOML serialization fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }

    /// Get a configuration value by `section.key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "check.strict" => Some(self.check.strict.to_string()),
            "catalog.allow_unknown" => Some(self.catalog.allow_unknown.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by `section.key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "check.strict" => {
                self.check.strict = parse_bool(key, value)?;
            }
            "catalog.allow_unknown" => {
                self.catalog.allow_unknown = parse_bool(key, value)?;
            }
            _ => return Err(anyhow::anyhow!("Unknown configuration key: {key}")),
        }
        Ok(())
    }

    /// Reset a configuration key to its default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "check.strict" => self.check.strict = CheckConfig::default().strict,
            "catalog.allow_unknown" => {
                self.catalog.allow_unknown = CatalogConfig::default().allow_unknown;
            }
            _ => return Err(anyhow::anyhow!("Unknown configuration key: {key}")),
        }
        Ok(())
    }
}

/// Parses a boolean config value.
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("Invalid boolean for {key}: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.check.strict);
        assert!(config.catalog.allow_unknown);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        let config = Config::load(&path).unwrap();
        assert!(path.exists());
        assert!(!config.check.strict);
    }

    #[test]
    fn test_set_get_unset_round_trip() {
        let mut config = Config::default();
        config.set("check.strict", "true").unwrap();
        assert_eq!(config.get("check.strict").as_deref(), Some("true"));

        config.unset("check.strict").unwrap();
        assert_eq!(config.get("check.strict").as_deref(), Some("false"));

        assert!(config.set("bogus.key", "1").is_err());
        assert!(config.set("check.strict", "maybe").is_err());
        assert!(config.get("bogus.key").is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");

        let mut config = Config::default();
        config.set("catalog.allow_unknown", "false").unwrap();
        config.save(&path).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert!(!reloaded.catalog.allow_unknown);
    }
}
