//! Plugin state and request handling
//!
//! The host delivers one request at a time and waits for the response, so a
//! single mutable state struct is all the coordination this needs. The entry
//! list is written once (after the startup load) and only read afterwards.

pub mod protocol;

pub use protocol::{Request, Response};

use tracing::warn;

use crate::clipboard::ClipboardSink;
use crate::dispatch;
use crate::domain::{Entry, SearchItem};
use crate::search::search;
use crate::vault::VaultClient;

/// The running plugin: loaded entries plus the two side-effect collaborators
pub struct Plugin<V, C> {
    entries: Vec<Entry>,
    vault: V,
    clipboard: C,
    max_results: usize,
}

impl<V, C> Plugin<V, C>
where
    V: VaultClient,
    C: ClipboardSink,
{
    pub fn new(entries: Vec<Entry>, vault: V, clipboard: C, max_results: usize) -> Self {
        Self {
            entries,
            vault,
            clipboard,
            max_results,
        }
    }

    /// Handle one request. Returns `None` on `exit`, which terminates the
    /// serve loop. Failures never escape: an activation that goes wrong
    /// becomes an error row in the response.
    pub async fn handle(&mut self, request: Request) -> Option<Response> {
        match request {
            Request::Query { text } => Some(self.handle_query(&text)),
            Request::Activate { id } => Some(self.handle_activate(&id).await),
            Request::Exit => None,
        }
    }

    fn handle_query(&self, text: &str) -> Response {
        let items = search(&self.entries, text, self.max_results)
            .into_iter()
            .map(SearchItem::from_entry)
            .collect();

        Response::Results { items }
    }

    async fn handle_activate(&mut self, id: &str) -> Response {
        let Some(entry) = self.entries.iter().find(|entry| entry.id == id).cloned() else {
            // Only happens if the host replays a stale id
            warn!(id, "activation for unknown entry id");
            return Response::Results {
                items: vec![SearchItem::error("unknown entry")],
            };
        };

        match dispatch::copy_password(&self.vault, &mut self.clipboard, &entry).await {
            Ok(()) => Response::Copied {
                name: entry.name.clone(),
            },
            Err(err) => {
                dispatch::log_failure(&entry, &err);
                Response::Results {
                    items: vec![SearchItem::error(err.to_string())],
                }
            }
        }
    }
}
