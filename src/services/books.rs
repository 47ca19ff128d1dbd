//! Books service
//!
//! Owns the two category side effects of book mutations: a category is
//! created on demand when a book is created against an unknown category id,
//! and a category is removed once its last book is deleted.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Category, CreateBook, DeleteOutcome, UpdateBook},
    repository::CatalogStore,
};

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const CATEGORY_EMPTY: &str = "No books found in the specified category";
pub const CREATE_FIELDS_REQUIRED: &str = "Author, title, and category_id are required fields";
pub const UPDATE_FIELDS_REQUIRED: &str = "Title and author are required fields";

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn CatalogStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.find_all_books().await
    }

    /// Get book by ID
    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.store
            .find_book(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// List the books of a category.
    ///
    /// An unknown category and a category without books both yield `NotFound`.
    pub async fn list_by_category(&self, category_id: i32) -> AppResult<Vec<Book>> {
        let books = self.store.find_books_by_category(category_id).await?;
        if books.is_empty() {
            return Err(AppError::NotFound(CATEGORY_EMPTY.to_string()));
        }
        Ok(books)
    }

    /// Create a book, creating a default category when `category_id` is unknown.
    ///
    /// The created category gets a fresh id from the store, which is usually
    /// not the requested one.
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let (Some(title), Some(author), Some(category_id)) =
            (data.title, data.author, data.category_id)
        else {
            return Err(AppError::Validation(CREATE_FIELDS_REQUIRED.to_string()));
        };

        let book = match self.store.find_category(category_id).await? {
            Some(category) => self.store.insert_book(&title, &author, &category).await?,
            None => {
                let book = self
                    .store
                    .insert_book_with_new_category(
                        &title,
                        &author,
                        &Category::default_name(category_id),
                    )
                    .await?;
                tracing::info!(
                    "Created category id={:?} for unknown category_id={}",
                    book.category_id,
                    category_id
                );
                book
            }
        };

        tracing::debug!("Created book id={} in category id={:?}", book.id, book.category_id);
        Ok(book)
    }

    /// Overwrite title and author of a book and optionally move it.
    ///
    /// A `category_id` that does not resolve leaves the book's category
    /// unchanged; unlike `create`, no category is made up. `data` carries the
    /// outcome of body parsing, which only matters once the book is found.
    pub async fn update(&self, id: i32, data: AppResult<UpdateBook>) -> AppResult<Book> {
        let mut book = self.get(id).await?;

        let data = data?;
        let (Some(title), Some(author)) = (data.title, data.author) else {
            return Err(AppError::Validation(UPDATE_FIELDS_REQUIRED.to_string()));
        };
        book.title = title;
        book.author = author;

        if let Some(category_id) = data.category_id {
            match self.store.find_category(category_id).await? {
                Some(category) => book.category_id = Some(category.id),
                None => tracing::debug!(
                    "Ignoring unknown category_id={} on update of book id={}",
                    category_id,
                    id
                ),
            }
        }

        self.store.update_book(&book).await?;
        Ok(book)
    }

    /// Delete a book, then its category if no other book references it
    pub async fn delete(&self, id: i32) -> AppResult<DeleteOutcome> {
        let book = self.get(id).await?;

        if self.store.delete_book(&book).await? {
            tracing::info!(
                "Deleted category id={:?} with its last book id={}",
                book.category_id,
                book.id
            );
            return Ok(DeleteOutcome::BookAndCategoryDeleted);
        }

        Ok(DeleteOutcome::BookDeleted)
    }

    /// Check that the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
