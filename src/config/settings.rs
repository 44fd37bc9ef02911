use anyhow::{anyhow, bail, Context, Result};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::location::{DEFAULT_CITY, DEFAULT_COUNTRY};

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}
fn default_city() -> String {
    DEFAULT_CITY.to_string()
}
fn default_base_url() -> String {
    "https://api.aladhan.com/v1".to_string()
}
fn default_method() -> u8 {
    2
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_timezone() -> String {
    "Asia/Gaza".to_string()
}
fn default_tick_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_city")]
    pub city: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            country: default_country(),
            city: default_city(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Aladhan calculation method id (2 = ISNA).
    #[serde(default = "default_method")]
    pub method: u8,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            method: default_method(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// IANA zone used for the live clock and for "today".
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl DisplayConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("Unknown timezone '{}': {}", self.timezone, e))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "iqama").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        if config.display.tick_ms == 0 {
            bail!("display.tick_ms must be at least 1 in {:?}", path);
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.location.city, "Ramallah");
        assert_eq!(config.api.method, 2);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[location]\ncountry = \"EG\"\ncity = \"Cairo\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.location.country, "EG");
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.display.timezone, "Asia/Gaza");
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.display.tick_ms = 250;

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ntick_ms = 0\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("tick_ms"));
    }

    #[test]
    fn timezone_must_be_known() {
        assert!(DisplayConfig::default().tz().is_ok());
        let bad = DisplayConfig {
            timezone: "Mars/Olympus".to_string(),
            ..DisplayConfig::default()
        };
        assert!(bad.tz().is_err());
    }
}
