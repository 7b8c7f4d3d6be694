use serde::{Deserialize, Serialize};

use super::Entry;

/// One rendered result row sent back to the host launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Id of the vault entry this row activates; empty for error rows
    pub id: String,
    /// Primary display text
    pub name: String,
    /// Secondary display text (the entry's username)
    pub description: String,
}

impl SearchItem {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            description: entry.user.clone(),
        }
    }

    /// A non-activatable row describing a failure. The message must never
    /// contain secret material.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: "Failed to copy password".to_string(),
            description: message.into(),
        }
    }
}
