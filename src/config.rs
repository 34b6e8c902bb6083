//! Application configuration.
//!
//! The configuration is an optional JSON file, by default
//! `$XDG_CONFIG_HOME/wsassign/config.json`.  It only tweaks how the backends
//! find the compositor; everything about *what* to assign comes from the
//! command line.
//!
//! # Example
//!
//! ```json
//! {
//!   "runtime_dir": "/run/user/1000",
//!   "hyprctl": "/usr/local/bin/hyprctl"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and all fields
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the `hypr/<signature>/` socket directories.
    /// Defaults to `/run/user/<uid>` when unset.
    pub runtime_dir: Option<PathBuf>,
    /// Program invoked by the `--batch` backend.  Looked up on `PATH`
    /// unless it contains a `/`.
    pub hyprctl: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime_dir: None,
            hyprctl: "hyprctl".into(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Default location, `$XDG_CONFIG_HOME/wsassign/config.json`.
    pub fn default_path() -> PathBuf {
        let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
            format!("{}/.config", home)
        });
        PathBuf::from(base).join("wsassign").join("config.json")
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
