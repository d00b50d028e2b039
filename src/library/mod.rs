//! In-memory book collection: records, id allocation, and the store operations
//! (add, remove, update, filter) that the controller funnels mutations through.

pub mod book;
pub mod error;
pub mod store;

pub use book::{Book, BookId};
pub use error::LibraryError;
pub use store::Library;
