//! Configuration loading
//!
//! Optional TOML file; every field has a default so a missing file (the
//! common case) just means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::loader::RetryPolicy;

/// Plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name or path of the rbw binary
    #[serde(default = "default_rbw_binary")]
    pub rbw_binary: String,

    /// Maximum number of rendered results per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Delay between startup listing attempts, in milliseconds
    #[serde(default = "default_retry_interval_ms")]
    pub retry_interval_ms: u64,

    /// Maximum startup listing attempts; 0 means retry until the vault
    /// unlocks
    #[serde(default)]
    pub retry_max_attempts: u32,

    /// Timeout for a single rbw invocation, in seconds
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,
}

fn default_rbw_binary() -> String {
    "rbw".to_string()
}

fn default_max_results() -> usize {
    10
}

fn default_retry_interval_ms() -> u64 {
    1000
}

fn default_command_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rbw_binary: default_rbw_binary(),
            max_results: default_max_results(),
            retry_interval_ms: default_retry_interval_ms(),
            retry_max_attempts: 0,
            command_timeout_secs: default_command_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from an explicit path, or from the default
    /// location if it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Some(default_path) = Self::default_path() {
            if default_path.exists() {
                return Self::from_file(&default_path);
            }
        }

        Ok(Self::default())
    }

    /// `~/.config/rbw-launcher/config.toml` (platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rbw-launcher").join("config.toml"))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval: Duration::from_millis(self.retry_interval_ms),
            max_attempts: self.retry_max_attempts,
        }
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}
