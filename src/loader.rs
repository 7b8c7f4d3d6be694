//! Startup entry loading
//!
//! The vault may need an interactive unlock (pin entry) that completes
//! outside this process, so the first listing attempts are expected to fail.
//! The loader polls until it gets a non-empty entry list, logging each failed
//! attempt. The interval and attempt cap are injectable so tests run without
//! real sleeps.

use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

use crate::domain::Entry;
use crate::vault::VaultClient;

/// Retry behavior for the startup load
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Delay between attempts
    pub interval: Duration,
    /// Maximum number of attempts; 0 means retry forever
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 0,
        }
    }
}

/// Load the vault entries, retrying per `policy` until a non-empty listing
/// succeeds. An empty listing is treated as not-yet-loaded: right after boot
/// rbw can answer before the vault is actually usable.
pub async fn load_entries<V: VaultClient>(vault: &V, policy: &RetryPolicy) -> Result<Vec<Entry>> {
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        match vault.list_entries().await {
            Ok(entries) if !entries.is_empty() => {
                info!(count = entries.len(), "loaded vault entries");
                return Ok(entries);
            }
            Ok(_) => {
                error!(attempt, "vault listing returned no entries");
            }
            Err(err) => {
                // Locked vault or cancelled pin entry lands here
                error!(attempt, error = %err, "vault listing failed");
            }
        }

        if policy.max_attempts != 0 && attempt >= policy.max_attempts {
            anyhow::bail!("gave up loading vault entries after {attempt} attempts");
        }

        tokio::time::sleep(policy.interval).await;
    }
}
