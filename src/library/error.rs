use crate::library::BookId;
use thiserror::Error;

/// Why a store mutation was rejected. The collection is never modified when
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("title is empty")]
    EmptyTitle,

    #[error("author is empty")]
    EmptyAuthor,

    #[error("no book with id {0}")]
    NotFound(BookId),
}
