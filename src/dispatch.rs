//! Secret dispatch
//!
//! Fetches the decrypted password for one entry and puts it on the
//! clipboard. The secret itself is never logged and never appears in a
//! user-visible message; failures are described by class only.

use tracing::{debug, warn};

use crate::clipboard::ClipboardSink;
use crate::domain::Entry;
use crate::vault::{VaultClient, VaultError};

/// Why an activation produced no clipboard write.
///
/// The `Display` text is shown to the user, so it must stay free of secret
/// material and of raw tool output.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to fetch the password (vault locked?)")]
    Fetch(#[source] VaultError),

    #[error("failed to copy to the clipboard")]
    Clipboard(#[source] anyhow::Error),
}

/// Fetch the password for `entry` and copy it to the clipboard.
///
/// On failure the clipboard is left untouched.
pub async fn copy_password<V, C>(
    vault: &V,
    clipboard: &mut C,
    entry: &Entry,
) -> Result<(), DispatchError>
where
    V: VaultClient,
    C: ClipboardSink,
{
    let secret = vault
        .fetch_secret(&entry.id)
        .await
        .map_err(DispatchError::Fetch)?;

    // rbw prints the password with a trailing newline
    clipboard
        .set_text(secret.trim_end())
        .map_err(DispatchError::Clipboard)?;

    debug!(entry = %entry.name, "copied password to clipboard");
    Ok(())
}

/// Log a dispatch failure. Stderr from the vault tool never contains the
/// secret, so the full error chain is safe to log.
pub fn log_failure(entry: &Entry, err: &DispatchError) {
    match err {
        DispatchError::Fetch(source) => {
            warn!(entry = %entry.name, error = %source, "password fetch failed");
        }
        DispatchError::Clipboard(source) => {
            warn!(entry = %entry.name, error = %source, "clipboard write failed");
        }
    }
}
