//! Configuration file support for Stride.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/stride/config.toml`.

use crate::{Error, PersonalProfile, RecordKind, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub batch: BatchConfig,
}

/// Personal profile used for calorie formulas
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Weight in kilograms
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Height in meters
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            weight: default_weight(),
            height: default_height(),
        }
    }
}

impl From<&ProfileConfig> for PersonalProfile {
    fn from(config: &ProfileConfig) -> Self {
        PersonalProfile::new(config.name.clone(), config.weight, config.height)
    }
}

/// Batch processing configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_kind")]
    pub default_kind: RecordKind,

    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            default_kind: default_kind(),
            show_banner: default_show_banner(),
        }
    }
}

// Default value functions
fn default_name() -> String {
    "Anonymous".into()
}

fn default_weight() -> f64 {
    70.0
}

fn default_height() -> f64 {
    1.75
}

fn default_kind() -> RecordKind {
    RecordKind::Training
}

fn default_show_banner() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_or_default(&config_path)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => dirs::home_dir()
                .map(|home| home.join(".config"))
                .ok_or_else(|| Error::Config("cannot locate a config directory".into()))?,
        };
        Ok(base.join("stride").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// The personal profile described by this configuration
    pub fn personal_profile(&self) -> PersonalProfile {
        PersonalProfile::from(&self.profile)
    }
}
