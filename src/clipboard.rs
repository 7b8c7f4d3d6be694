//! Clipboard delivery
//!
//! Fire-and-forget: the secret is written to the system clipboard and never
//! read back. The trait exists so the dispatcher can be tested without a
//! display server.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Write-only clipboard seam
pub trait ClipboardSink {
    /// Place `text` on the clipboard, replacing its current contents.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl<T: ClipboardSink + ?Sized> ClipboardSink for &mut T {
    fn set_text(&mut self, text: &str) -> Result<()> {
        (**self).set_text(text)
    }
}

/// `ClipboardSink` backed by the real system clipboard
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = Clipboard::new().context("failed to access the system clipboard")?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .context("failed to copy to clipboard")
    }
}
