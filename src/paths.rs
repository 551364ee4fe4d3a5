//! Centralized path definitions for lifeflow
//!
//! ## Storage Layout
//!
//! ```text
//! project/
//! ├── lifeflow.toml               # Project config (optional)
//! ├── lifeflow-data.json          # Directory data file
//! └── lifeflow-outbox.jsonl       # Queued outbound messages
//!
//! ~/.config/lifeflow/
//! └── config.toml                 # User-level fallback config
//! ```
//!
//! Data and outbox locations can be changed in the config; relative paths
//! are resolved against the working directory.

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "lifeflow.toml";

/// Default data file
pub const DEFAULT_DATA_FILE: &str = "lifeflow-data.json";

/// Default outbox file
pub const DEFAULT_OUTBOX_FILE: &str = "lifeflow-outbox.jsonl";

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/lifeflow";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config file in the working directory
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the global lifeflow directory.
///
/// Returns `~/.config/lifeflow/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/lifeflow/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
