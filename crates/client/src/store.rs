//! In-memory collection state with explicit merge primitives.
//!
//! A [`Collection`] is an ordered local copy of a server collection and
//! never the source of truth. All mutation goes through the four merge
//! primitives (`replace_all` / `append` / `substitute` / `remove`), each
//! fed by a confirmed server response.

use trackline_core::types::DbId;

use crate::types::{AnimeEntry, Book, Todo};

/// Records addressable by their server-assigned id.
pub trait Keyed {
    fn key(&self) -> DbId;
}

impl Keyed for Todo {
    fn key(&self) -> DbId {
        self.id
    }
}

impl Keyed for AnimeEntry {
    fn key(&self) -> DbId {
        self.id
    }
}

impl Keyed for Book {
    fn key(&self) -> DbId {
        self.id
    }
}

/// Ordered local copy of one server collection.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh server listing.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Drop all local state (the failure fallback for refresh).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append a newly created record returned by the server.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the record with the same id, if present.
    ///
    /// Returns `false` when no local record matches, which callers treat
    /// as a signal that local state had already drifted.
    pub fn substitute(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|i| i.key() == item.key()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id, returning it if present.
    pub fn remove(&mut self, id: DbId) -> Option<T> {
        let index = self.items.iter().position(|i| i.key() == id)?;
        Some(self.items.remove(index))
    }

    /// Look up a record by id.
    pub fn get(&self, id: DbId) -> Option<&T> {
        self.items.iter().find(|i| i.key() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
