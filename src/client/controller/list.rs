use crate::model::{
    item::ItemDto, review::ReviewDto, seller::SellerRequestDto, user::UserDto,
};

/// Identifies an entity within its collection.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for UserDto {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for ItemDto {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for ReviewDto {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for SellerRequestDto {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The in-memory collection behind one entity page.
///
/// Holds the loading flag and the last fetch failure alongside the entries
/// so a page needs a single piece of state. No cross-page cache coherence
/// is attempted; each view owns its slice exclusively.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    entries: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T: HasId> ListState<T> {
    /// Starts in the loading state, before the initial fetch resolves.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Replaces the collection with a successful fetch result.
    pub fn set_loaded(&mut self, entries: Vec<T>) {
        self.entries = entries;
        self.loading = false;
        self.error = None;
    }

    /// Records a fetch failure. The collection is left as-is.
    pub fn set_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Reconciles one record from a data-source response: replaces the
    /// entry with the same id or appends a newly created one.
    pub fn upsert(&mut self, entity: T) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id() == entity.id())
        {
            Some(existing) => *existing = entity,
            None => self.entries.push(entity),
        }
    }

    /// Drops the entry with the given id, if present.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id() != id);
    }
}

impl<T: HasId> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}
