use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};
use weather_core::{ClientId, LiveSettings};

/// Endpoint overrides for the live client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LiveConfig {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// default_client = "happy-path"
///
/// [live]
/// url = "https://www.metaweather.com/api/location/2459115"
/// timeout_secs = 10
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Client used when `--client` is not given. Missing means live.
    pub default_client: Option<String>,

    #[serde(default)]
    pub live: LiveConfig,
}

impl Config {
    pub fn default_client_id(&self) -> Result<ClientId> {
        match self.default_client.as_deref() {
            None => Ok(ClientId::default()),
            Some(name) => ClientId::try_from(name).with_context(|| {
                format!("Invalid default_client in {}", Self::describe_path())
            }),
        }
    }

    pub fn set_default_client(&mut self, id: ClientId) {
        self.default_client = Some(id.as_str().to_string());
    }

    pub fn live_settings(&self) -> LiveSettings {
        let defaults = LiveSettings::default();

        LiveSettings {
            url: self.live.url.clone().unwrap_or(defaults.url),
            timeout: self.live.timeout_secs.map(Duration::from_secs).unwrap_or(defaults.timeout),
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-demo", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    fn describe_path() -> String {
        Self::config_file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "config".to_string())
    }
}
