use crate::library::LibraryError;
use chrono::Utc;

pub type BookId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Build a record from raw user input. Both fields are trimmed and must be
    /// non-empty afterwards; the title is checked first.
    pub fn new(id: BookId, title: &str, author: &str) -> Result<Self, LibraryError> {
        let (title, author) = validate(title, author)?;
        Ok(Self { id, title, author })
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

pub(crate) fn validate(title: &str, author: &str) -> Result<(String, String), LibraryError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(LibraryError::EmptyTitle);
    }
    let author = author.trim();
    if author.is_empty() {
        return Err(LibraryError::EmptyAuthor);
    }
    Ok((title.to_string(), author.to_string()))
}

/// Hands out millisecond-timestamp ids, bumped past the previous one so two
/// books created in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: BookId,
}

impl IdAllocator {
    #[cfg(test)]
    pub fn starting_after(last: BookId) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> BookId {
        let now = Utc::now().timestamp_millis().max(0) as BookId;
        let id = now.max(self.last + 1);
        self.last = id;
        id
    }
}
