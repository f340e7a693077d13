//! Data models for SimpleLib

pub mod author;
pub mod book;
pub mod page;

// Re-export commonly used types
pub use author::{Author, AuthorDto, AuthorPatch, AuthorQuery};
pub use book::{Book, BookDto, BookPatch};
pub use page::{Page, PageQuery, PageRequest};
