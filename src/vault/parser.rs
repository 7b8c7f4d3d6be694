//! Listing-output parser
//!
//! `rbw list --fields id,name,user` prints one entry per line with fields
//! separated by tabs. Rows with fewer than three fields are dropped rather
//! than failing the whole listing; extra fields are ignored.

use crate::domain::Entry;

/// Parse the tab-separated listing output into entries.
pub fn parse_entries(output: &str) -> Vec<Entry> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Entry> {
    let mut fields = line.split('\t');
    let id = fields.next()?;
    let name = fields.next()?;
    let user = fields.next()?;

    Some(Entry::new(id, name, user))
}
