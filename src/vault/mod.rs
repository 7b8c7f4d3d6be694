//! rbw CLI adapter
//!
//! The vault tool is an opaque collaborator: it owns unlock state and all
//! cryptography. This module drives exactly two of its commands,
//! `list --fields id,name,user` and `get <id>`, through a subprocess with a
//! bounded timeout.

mod parser;

pub use parser::parse_entries;

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::Config;
use crate::domain::Entry;

/// Errors from driving the rbw subprocess
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    /// `rbw list` exited non-zero (vault locked, pin cancelled, ...)
    #[error("vault listing failed: {stderr}")]
    Unavailable { stderr: String },

    /// `rbw get` exited non-zero (vault re-locked, entry removed, ...)
    #[error("secret fetch failed: {stderr}")]
    SecretFetch { stderr: String },

    /// The binary could not be spawned at all
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The subprocess did not finish within the configured timeout
    #[error("{binary} did not finish within {timeout:?}")]
    Timeout { binary: String, timeout: Duration },
}

/// Seam between the plugin and the external vault tool
#[async_trait]
pub trait VaultClient: Send + Sync {
    /// List all vault entries as `(id, name, user)` triples
    async fn list_entries(&self) -> Result<Vec<Entry>, VaultError>;

    /// Fetch the decrypted password for one entry id, as the tool printed
    /// it (trailing newline included). The returned value must never be
    /// logged.
    async fn fetch_secret(&self, id: &str) -> Result<String, VaultError>;
}

/// `VaultClient` backed by the real rbw binary
pub struct RbwClient {
    binary: String,
    command_timeout: Duration,
}

impl RbwClient {
    pub fn new(binary: impl Into<String>, command_timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            command_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rbw_binary.clone(), config.command_timeout())
    }

    async fn run(&self, args: &[&str]) -> Result<std::process::Output, VaultError> {
        let child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| VaultError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let output = timeout(self.command_timeout, child.wait_with_output())
            .await
            .map_err(|_| VaultError::Timeout {
                binary: self.binary.clone(),
                timeout: self.command_timeout,
            })?
            .map_err(|source| VaultError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        Ok(output)
    }
}

#[async_trait]
impl VaultClient for RbwClient {
    async fn list_entries(&self) -> Result<Vec<Entry>, VaultError> {
        let output = self.run(&["list", "--fields", "id,name,user"]).await?;

        if !output.status.success() {
            return Err(VaultError::Unavailable {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_entries(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn fetch_secret(&self, id: &str) -> Result<String, VaultError> {
        let output = self.run(&["get", id]).await?;

        if !output.status.success() {
            return Err(VaultError::SecretFetch {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
