//! rbw-launcher - search your Bitwarden vault from a launcher
//!
//! A launcher plugin that lists vault entries through the `rbw` CLI, filters
//! them against the user's query, and copies the selected entry's password to
//! the clipboard. The host launcher drives the plugin with line-delimited
//! JSON requests on stdin and reads one JSON response per request on stdout.
//!
//! The vault tool owns all cryptography and unlock state; this crate only
//! shells out to its `list` and `get` commands.

pub mod clipboard;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod loader;
pub mod plugin;
pub mod search;
pub mod vault;

pub use domain::*;
