//! Book model and request/response payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category_id: Option<i32>,
}

/// Book as returned by the listing and single-book lookups (no category)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookShort {
    pub id: i32,
    pub title: String,
    pub author: String,
}

impl From<Book> for BookShort {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }
}

/// Create book request.
///
/// Fields are optional so that a missing field is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Category to attach the book to; created on demand if unknown
    pub category_id: Option<i32>,
}

/// Update book request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    /// New category; ignored when it does not exist
    pub category_id: Option<i32>,
}

/// Outcome of a book deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    BookDeleted,
    BookAndCategoryDeleted,
}

impl DeleteOutcome {
    pub fn message(self) -> &'static str {
        match self {
            DeleteOutcome::BookDeleted => "Book deleted successfully",
            DeleteOutcome::BookAndCategoryDeleted => "Book and Category deleted successfully",
        }
    }
}

/// Generic message response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl From<DeleteOutcome> for MessageResponse {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            message: outcome.message().to_string(),
        }
    }
}
