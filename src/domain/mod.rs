//! Core domain types

mod entry;
mod item;

pub use entry::Entry;
pub use item::SearchItem;
