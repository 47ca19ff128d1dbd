//! Data models for Bookshelf

pub mod book;
pub mod category;

// Re-export commonly used types
pub use book::{Book, BookShort, CreateBook, DeleteOutcome, MessageResponse, UpdateBook};
pub use category::Category;
