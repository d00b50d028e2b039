use crate::library::book::{self, IdAllocator};
use crate::library::{Book, BookId, LibraryError};
use std::sync::Arc;

/// Ordered book collection, most recently added first.
///
/// Every successful mutation swaps in a freshly built snapshot and leaves the
/// previous one untouched, so holders of an older [`Library::snapshot`] can
/// detect change with `Arc::ptr_eq`. Rejected mutations keep the current
/// snapshot.
#[derive(Debug, Default)]
pub struct Library {
    books: Arc<Vec<Book>>,
    ids: IdAllocator,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_books(books: Vec<Book>) -> Self {
        let last = books.iter().map(|b| b.id).max().unwrap_or(0);
        Self {
            books: Arc::new(books),
            ids: IdAllocator::starting_after(last),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn snapshot(&self) -> Arc<Vec<Book>> {
        Arc::clone(&self.books)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Trim and validate the input, then prepend a new record.
    pub fn add(&mut self, title: &str, author: &str) -> Result<&Book, LibraryError> {
        let (title, author) = book::validate(title, author)?;
        let book = Book {
            id: self.ids.next_id(),
            title,
            author,
        };
        let mut next = Vec::with_capacity(self.books.len() + 1);
        next.push(book);
        next.extend(self.books.iter().cloned());
        self.books = Arc::new(next);
        Ok(&self.books[0])
    }

    /// Remove the record with `id`, returning it. Absent ids are ignored.
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id == id)?;
        let mut next: Vec<Book> = self.books.as_ref().clone();
        let removed = next.remove(pos);
        self.books = Arc::new(next);
        Some(removed)
    }

    /// Replace title and author of the record with `id`, keeping its id and
    /// position.
    pub fn update(&mut self, id: BookId, title: &str, author: &str) -> Result<&Book, LibraryError> {
        let updated = Book::new(id, title, author)?;
        let pos = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(LibraryError::NotFound(id))?;
        let mut next: Vec<Book> = self.books.as_ref().clone();
        next[pos] = updated;
        self.books = Arc::new(next);
        Ok(&self.books[pos])
    }

    /// Records whose title or author contains `query`, ignoring case, in
    /// collection order. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<Book> {
        let needle = query.to_lowercase();
        self.books()
            .iter()
            .filter(|b| b.matches(&needle))
            .cloned()
            .collect()
    }
}
