//! Collection state manager: the owned in-memory book list, the three view
//! controls, and the derived view the presentation layer renders.
//!
//! Every mutation is two-phase: the gateway call first, then the local list
//! patch only on success. Failures never touch the list; they surface as a
//! notification and a `false`/`Ok(false)` result. All mutating intents take
//! `&mut self`, so overlapping mutations cannot exist on one catalog.

mod notify;
mod view;

pub use notify::{Notification, Notifier, NotifyKind, TermNotifier};
pub use view::{derive_view, SortDirection, SortOption, SortSpec};

use thiserror::Error;
use tracing::debug;

use crate::book::{Book, BookPatch, NewBook};
use crate::gateway::BookGateway;

/// Local validation failure, raised before any network call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("book identifier is required for updating")]
    MissingId,
}

/// Owns the authoritative in-memory copy of the remote collection. The
/// remote service stays the source of truth; this list is a cache patched
/// optimistically after each successful remote call.
pub struct BookCatalog {
    gateway: Box<dyn BookGateway>,
    notifier: Box<dyn Notifier>,
    books: Vec<Book>,
    search_query: String,
    genre_filter: Option<String>,
    sort: SortSpec,
    view: Vec<Book>,
}

impl BookCatalog {
    pub fn new(gateway: Box<dyn BookGateway>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            books: Vec::new(),
            search_query: String::new(),
            genre_filter: None,
            sort: SortSpec::default(),
            view: Vec::new(),
        }
    }

    /// Fetch the full record set and replace the base list wholesale.
    /// Returns false on failure, leaving any previously loaded list intact.
    pub fn load(&mut self) -> bool {
        match self.gateway.list_all() {
            Ok(books) => {
                self.books = books;
                self.recompute();
                true
            }
            Err(err) => {
                debug!("list request failed: {}", err);
                self.notifier
                    .notify(Notification::error("Failed to fetch your books"));
                false
            }
        }
    }

    /// Create a record remotely, then prepend the server's copy (which now
    /// carries the assigned id and timestamp) to the base list.
    pub fn create(&mut self, draft: NewBook) -> bool {
        match self.gateway.create(&draft) {
            Ok(created) => {
                self.books.insert(0, created);
                self.recompute();
                self.notifier
                    .notify(Notification::success("Book added to your library"));
                true
            }
            Err(err) => {
                debug!("create request failed: {}", err);
                self.notifier.notify(Notification::error("Failed to add book"));
                false
            }
        }
    }

    /// Update a record remotely, then replace the matching local record with
    /// the server's copy (no-op when the id is not present locally). An
    /// empty id fails before any network call.
    pub fn update(&mut self, id: &str, patch: BookPatch) -> Result<bool, IntentError> {
        if id.is_empty() {
            return Err(IntentError::MissingId);
        }

        match self.gateway.update(id, &patch) {
            Ok(updated) => {
                if let Some(slot) = self.books.iter_mut().find(|book| book.id == id) {
                    *slot = updated;
                }
                self.recompute();
                self.notifier
                    .notify(Notification::success("Book updated successfully"));
                Ok(true)
            }
            Err(err) => {
                self.notifier
                    .notify(Notification::error(format!("Failed to update book: {}", err)));
                Ok(false)
            }
        }
    }

    /// Delete a record remotely, then drop the matching local record.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.gateway.remove(id) {
            Ok(()) => {
                self.books.retain(|book| book.id != id);
                self.recompute();
                self.notifier
                    .notify(Notification::success("Book removed from your library"));
                true
            }
            Err(err) => {
                debug!("delete request failed: {}", err);
                self.notifier
                    .notify(Notification::error("Failed to delete book"));
                false
            }
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.recompute();
    }

    pub fn set_genre_filter(&mut self, genre: Option<String>) {
        self.genre_filter = genre;
        self.recompute();
    }

    /// The full base list, in server order with local patches applied
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The filtered, searched, sorted projection currently shown to the user
    pub fn view(&self) -> &[Book] {
        &self.view
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn genre_filter(&self) -> Option<&str> {
        self.genre_filter.as_deref()
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    fn recompute(&mut self) {
        self.view = derive_view(
            &self.books,
            &self.search_query,
            self.genre_filter.as_deref(),
            self.sort,
        );
    }
}
