/// One vault item as exposed by `rbw list --fields id,name,user`
///
/// Immutable after load. `id` is rbw's opaque item identifier, unique per
/// vault; `name` and `user` are display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Opaque vault-item identifier
    pub id: String,
    /// Entry name (e.g., the site name)
    pub name: String,
    /// Username for the entry
    pub user: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user: user.into(),
        }
    }

    /// The text a query is matched against
    pub fn display_text(&self) -> String {
        format!("{} {}", self.name, self.user)
    }
}
