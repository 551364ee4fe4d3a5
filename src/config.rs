//! Configuration management
//!
//! Looked up in order: `lifeflow.toml` in the working directory, then
//! `~/.config/lifeflow/config.toml`, then built-in defaults.
//!
//! ```toml
//! [storage]
//! data_file = "lifeflow-data.json"
//! outbox_file = "lifeflow-outbox.jsonl"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! poll_interval_ms = 2000
//!
//! [alerts]
//! inventory_alerts = true
//! match_alerts = true
//! system_alerts = true
//!
//! [assistant]
//! model = "gemini-3-flash-preview"
//! api_key_env = "API_KEY"
//! temperature = 0.7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::NotificationSettings;
use crate::paths;

/// Full lifeflow configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where data lives
    #[serde(default)]
    pub storage: StorageConfig,
    /// HTTP server
    #[serde(default)]
    pub server: ServerConfig,
    /// Which alert categories are produced
    #[serde(default)]
    pub alerts: NotificationSettings,
    /// Chat assistant backend
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Storage locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory data file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Outbound message outbox
    #[serde(default = "default_outbox_file")]
    pub outbox_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(paths::DEFAULT_DATA_FILE)
}

fn default_outbox_file() -> PathBuf {
    PathBuf::from(paths::DEFAULT_OUTBOX_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            outbox_file: default_outbox_file(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// How often the data file is checked for external writes
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_poll_interval_ms() -> u64 {
    2000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Hosted model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
        }
    }
}

impl AssistantConfig {
    /// API key from the configured environment variable
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
    }
}

impl Config {
    /// Load the first config found, or defaults when there is none
    pub fn load() -> anyhow::Result<Self> {
        for path in [paths::project_config(), paths::global_config()] {
            if path.exists() {
                log::debug!("Using config {}", path.display());
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load config from `path`
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
