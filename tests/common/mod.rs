//! Shared test doubles: an in-memory vault client and a recording clipboard

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use rbw_launcher::clipboard::ClipboardSink;
use rbw_launcher::domain::Entry;
use rbw_launcher::vault::{VaultClient, VaultError};

/// What one `list_entries` call should produce
#[derive(Debug, Clone)]
pub enum ListOutcome {
    Entries(Vec<Entry>),
    Locked,
    Empty,
}

/// `VaultClient` double. Listing outcomes are consumed in order; the last
/// one repeats once the queue runs dry.
pub struct FakeVault {
    list_outcomes: Mutex<VecDeque<ListOutcome>>,
    secrets: HashMap<String, String>,
    failing_ids: Vec<String>,
}

impl FakeVault {
    pub fn new(list_outcomes: Vec<ListOutcome>) -> Self {
        Self {
            list_outcomes: Mutex::new(list_outcomes.into()),
            secrets: HashMap::new(),
            failing_ids: Vec::new(),
        }
    }

    /// A vault that lists `entries` on the first try
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self::new(vec![ListOutcome::Entries(entries)])
    }

    pub fn with_secret(mut self, id: &str, secret: &str) -> Self {
        self.secrets.insert(id.to_string(), secret.to_string());
        self
    }

    /// Make `fetch_secret` fail for this id
    pub fn with_failing_secret(mut self, id: &str) -> Self {
        self.failing_ids.push(id.to_string());
        self
    }

    fn next_list_outcome(&self) -> ListOutcome {
        let mut outcomes = self.list_outcomes.lock().unwrap();
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap()
        } else {
            outcomes.front().cloned().unwrap_or(ListOutcome::Locked)
        }
    }
}

#[async_trait]
impl VaultClient for FakeVault {
    async fn list_entries(&self) -> Result<Vec<Entry>, VaultError> {
        match self.next_list_outcome() {
            ListOutcome::Entries(entries) => Ok(entries),
            ListOutcome::Empty => Ok(Vec::new()),
            ListOutcome::Locked => Err(VaultError::Unavailable {
                stderr: "failed to unlock the vault".to_string(),
            }),
        }
    }

    async fn fetch_secret(&self, id: &str) -> Result<String, VaultError> {
        if self.failing_ids.iter().any(|failing| failing == id) {
            return Err(VaultError::SecretFetch {
                stderr: "entry not found".to_string(),
            });
        }

        self.secrets
            .get(id)
            .cloned()
            .ok_or_else(|| VaultError::SecretFetch {
                stderr: "entry not found".to_string(),
            })
    }
}

/// `ClipboardSink` double that records every write
#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no clipboard available");
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

/// The canonical two-entry fixture
pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("id1", "GitHub", "alice"),
        Entry::new("id2", "GitLab", "bob"),
    ]
}
