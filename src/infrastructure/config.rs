// src/infrastructure/config.rs
use crate::constants::{DEFAULT_DATA_LOCATION, DEFAULT_PAGE_SIZE, DEFAULT_RANDOM_COUNT, PROMOTION_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for the quote viewer
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_random_count")]
    pub random_count: usize,
    #[serde(default = "default_markdown")]
    pub markdown: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_data")]
    pub data: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ShareConfig {
    #[serde(default = "default_promotion")]
    pub promotion: String,
}

fn default_page_size() -> usize { DEFAULT_PAGE_SIZE }
fn default_random_count() -> usize { DEFAULT_RANDOM_COUNT }
fn default_markdown() -> bool { true }
fn default_data() -> String { DEFAULT_DATA_LOCATION.to_string() }
fn default_promotion() -> String { PROMOTION_URL.to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            random_count: default_random_count(),
            markdown: default_markdown(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { data: default_data() }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self { promotion: default_promotion() }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Explicit path if given, else the per-user config file when it exists,
    /// else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Using provided config path");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Using user config");
                Self::load(path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vichaar").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.page_size, 10);
        assert_eq!(config.display.random_count, 10);
        assert!(config.display.markdown);
        assert_eq!(config.source.data, "data.json");
        assert_eq!(config.share.promotion, "https://koustubh1234g.github.io/Vichaar/");
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[display]
page_size = 5
markdown = false

[source]
data = "https://example.org/quotes.json"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.display.page_size, 5);
        assert!(!config.display.markdown);
        assert_eq!(config.display.random_count, 10);
        assert_eq!(config.source.data, "https://example.org/quotes.json");
        assert_eq!(config.share, ShareConfig::default());
    }

    #[test]
    fn test_load_share_section() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[share]\npromotion = \"https://quotes.example\"\n").unwrap();

        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded.share.promotion, "https://quotes.example");
        assert_eq!(loaded.display, DisplayConfig::default());
    }

    #[test]
    fn test_resolve_with_missing_explicit_path_fails() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("absent.toml");

        let result = Config::resolve(Some(missing.as_path()));

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[display\npage_size = ").unwrap();

        assert!(Config::load(&config_path).is_err());
    }
}
