//! Per-resource views: an [`ApiClient`] plus a local [`Collection`].
//!
//! Reconciliation rules:
//! - refresh replaces state wholesale; any failure falls back to empty
//!   rather than keeping stale or malformed state.
//! - create appends the server's returned record (with its assigned id).
//! - update/toggle substitute the server's returned record; the response,
//!   not the request's intent, decides the resulting value.
//! - delete removes the matching local record by id.
//!
//! On any failed mutation the local collection is left untouched and the
//! error is surfaced to the caller.

use trackline_core::types::DbId;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::store::Collection;
use crate::types::{AnimeEntry, Book, Todo};

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

/// View over the todo list.
pub struct TodoView {
    api: ApiClient,
    todos: Collection<Todo>,
}

impl TodoView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            todos: Collection::new(),
        }
    }

    /// The current local copy, in server (id) order.
    pub fn todos(&self) -> &[Todo] {
        self.todos.items()
    }

    /// Fetch the full list and replace local state wholesale.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.list_todos().await {
            Ok(todos) => {
                self.todos.replace_all(todos);
                Ok(())
            }
            Err(err) => {
                self.todos.clear();
                Err(err)
            }
        }
    }

    /// Create a todo and append the server's record, returning its id.
    pub async fn add(&mut self, text: &str) -> Result<DbId, ClientError> {
        let todo = self.api.create_todo(text).await?;
        let id = todo.id;
        self.todos.append(todo);
        Ok(id)
    }

    /// Change a todo's text.
    pub async fn rename(&mut self, id: DbId, text: &str) -> Result<(), ClientError> {
        let todo = self.api.update_todo(id, Some(text), None).await?;
        self.todos.substitute(todo);
        Ok(())
    }

    /// Toggle completion server-side, returning the confirmed value.
    pub async fn toggle(&mut self, id: DbId) -> Result<bool, ClientError> {
        let todo = self.api.toggle_todo(id).await?;
        let completed = todo.completed;
        self.todos.substitute(todo);
        Ok(completed)
    }

    /// Delete a todo and drop it from local state.
    pub async fn remove(&mut self, id: DbId) -> Result<(), ClientError> {
        let deleted = self.api.delete_todo(id).await?;
        self.todos.remove(deleted.id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Anime
// ---------------------------------------------------------------------------

/// View over the anime watchlist.
pub struct AnimeView {
    api: ApiClient,
    entries: Collection<AnimeEntry>,
}

impl AnimeView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            entries: Collection::new(),
        }
    }

    pub fn entries(&self) -> &[AnimeEntry] {
        self.entries.items()
    }

    /// Fetch the full watchlist and replace local state wholesale.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.list_anime().await {
            Ok(entries) => {
                self.entries.replace_all(entries);
                Ok(())
            }
            Err(err) => {
                self.entries.clear();
                Err(err)
            }
        }
    }

    /// Add an entry and append the server's record, returning its id.
    pub async fn add(&mut self, title: &str, status: &str, score: f64) -> Result<DbId, ClientError> {
        let entry = self.api.create_anime(title, status, score).await?;
        let id = entry.id;
        self.entries.append(entry);
        Ok(id)
    }

    /// Move an entry to a new watch status.
    pub async fn set_status(&mut self, id: DbId, status: &str) -> Result<(), ClientError> {
        let entry = self.api.update_anime(id, None, Some(status), None).await?;
        self.entries.substitute(entry);
        Ok(())
    }

    /// Change an entry's score.
    pub async fn rate(&mut self, id: DbId, score: f64) -> Result<(), ClientError> {
        let entry = self.api.update_anime(id, None, None, Some(score)).await?;
        self.entries.substitute(entry);
        Ok(())
    }

    /// Delete an entry and drop it from local state.
    pub async fn remove(&mut self, id: DbId) -> Result<(), ClientError> {
        let deleted = self.api.delete_anime(id).await?;
        self.entries.remove(deleted.id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Books
// ---------------------------------------------------------------------------

/// View over the read-only book shelf.
pub struct BookShelf {
    api: ApiClient,
    books: Collection<Book>,
}

impl BookShelf {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            books: Collection::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        self.books.items()
    }

    /// Fetch the full shelf and replace local state wholesale.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.list_books().await {
            Ok(books) => {
                self.books.replace_all(books);
                Ok(())
            }
            Err(err) => {
                self.books.clear();
                Err(err)
            }
        }
    }

    /// Search by title fragment; the displayed collection becomes the
    /// result set (a later `refresh` restores the full shelf).
    pub async fn search(&mut self, title: &str) -> Result<usize, ClientError> {
        match self.api.search_books(title).await {
            Ok(hits) => {
                let count = hits.len();
                self.books.replace_all(hits);
                Ok(count)
            }
            Err(err) => {
                self.books.clear();
                Err(err)
            }
        }
    }

    /// Look up a single book without touching displayed state.
    pub async fn lookup(&self, id: DbId) -> Result<Book, ClientError> {
        self.api.get_book(id).await
    }
}
