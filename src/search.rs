//! Query matching
//!
//! Plain case-insensitive substring containment against `"{name} {user}"` -
//! no fuzzy scoring, no re-ranking. The filter is stable: results keep the
//! order of the loaded entry list, truncated at the result cap.
//!
//! Empty and whitespace-only queries match everything (truncated), so the
//! user gets a browse view when the launcher opens with no input yet.

use crate::domain::Entry;

/// Filter `entries` by `query`, returning at most `limit` matches in their
/// original order.
pub fn search<'a>(entries: &'a [Entry], query: &str, limit: usize) -> Vec<&'a Entry> {
    let needle = query.trim().to_lowercase();

    entries
        .iter()
        .filter(|entry| entry.display_text().to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
