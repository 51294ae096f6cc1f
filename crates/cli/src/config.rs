// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in `<config dir>/beermap/config.toml` (or the file
//! named by `BEERMAP_CONFIG`) and includes:
//! - `[remote]`: the hosted store endpoint, its public key and table
//! - `[map]`: whether this platform can show a map
//! - `[profile]`: the name shown on the profile screen
//!
//! A missing file means defaults. `BEERMAP_URL` and `BEERMAP_ANON_KEY`
//! override the `[remote]` endpoint.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "beermap";
const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session.json";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Hosted store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Public (anon) API key sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,
    /// Table holding the beer spots (default: "beer_spots").
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_table() -> String {
    "beer_spots".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            url: None,
            anon_key: None,
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteConfig {
    /// Returns the URL and key, or `None` if either is missing.
    pub fn endpoint(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.anon_key.as_deref()) {
            (Some(url), Some(key)) => Some((url, key)),
            _ => None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the configured URL and table name.
    ///
    /// Returns an error message if something is off.
    pub fn validate(&self) -> Option<String> {
        if let Some(url) = &self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Some(format!(
                    "invalid remote URL '{}': must start with http:// or https://",
                    url
                ));
            }
        }
        if self.table.is_empty()
            || !self
                .table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Some(format!(
                "invalid table name '{}': use letters, digits and underscores",
                self.table
            ));
        }
        if self.timeout_secs == 0 {
            return Some("timeout_secs must be at least 1".to_string());
        }
        None
    }
}

/// Map screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Whether this platform can render a map (default: true).
    #[serde(default = "default_true")]
    pub supported: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig { supported: true }
    }
}

/// Profile screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Name shown in the profile header (default: "Beer Enthusiast").
    #[serde(default = "default_username")]
    pub username: String,
}

fn default_username() -> String {
    "Beer Enthusiast".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            username: default_username(),
        }
    }
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if let Some(msg) = config.remote.validate() {
            return Err(Error::Config(msg));
        }
        Ok(config)
    }

    /// Loads configuration from the given file, or defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Loads the user's configuration and applies environment overrides.
    pub fn resolve() -> Result<Self> {
        let mut config = Self::load_or_default(&config_path())?;
        config.apply_overrides(env::remote_url(), env::anon_key());
        if let Some(msg) = config.remote.validate() {
            return Err(Error::Config(msg));
        }
        Ok(config)
    }

    /// Replaces the endpoint settings with any values that are present.
    pub fn apply_overrides(&mut self, url: Option<String>, anon_key: Option<String>) {
        if url.is_some() {
            self.remote.url = url;
        }
        if anon_key.is_some() {
            self.remote.anon_key = anon_key;
        }
    }

    /// Saves configuration to the given file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns the endpoint or a [`Error::NotConfigured`] naming the config file.
    pub fn require_endpoint(&self) -> Result<(&str, &str)> {
        self.remote.endpoint().ok_or_else(|| Error::NotConfigured {
            config_path: config_path().display().to_string(),
        })
    }
}

/// Location of the configuration file.
pub fn config_path() -> PathBuf {
    if let Some(path) = env::config_file() {
        return path;
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".beermap"))
        .join(CONFIG_FILE_NAME)
}

/// Directory for persisted client state (the auth session).
pub fn data_dir() -> PathBuf {
    if let Some(dir) = env::data_dir() {
        return dir;
    }
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".beermap"))
}

/// Path of the persisted session inside `data_dir`.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
