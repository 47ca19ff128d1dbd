//! Repository layer for database operations

pub mod books;
pub mod categories;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, Category},
};

/// Store operations the catalog service relies on.
///
/// Reads are single round-trips. Writes that touch both tables run in one
/// transaction, so a failure leaves neither change behind. Database errors
/// are propagated as-is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_all_books(&self) -> AppResult<Vec<Book>>;

    async fn find_book(&self, id: i32) -> AppResult<Option<Book>>;

    async fn find_books_by_category(&self, category_id: i32) -> AppResult<Vec<Book>>;

    async fn find_category(&self, id: i32) -> AppResult<Option<Category>>;

    /// Insert a book into an existing category
    async fn insert_book(&self, title: &str, author: &str, category: &Category) -> AppResult<Book>;

    /// Insert a category named `category_name` and a book attached to it,
    /// atomically
    async fn insert_book_with_new_category(
        &self,
        title: &str,
        author: &str,
        category_name: &str,
    ) -> AppResult<Book>;

    /// Persist title, author and category reference of an existing book
    async fn update_book(&self, book: &Book) -> AppResult<()>;

    /// Delete a book and, if it was the last book of its category, the
    /// category as well, atomically. Returns whether the category was removed.
    async fn delete_book(&self, book: &Book) -> AppResult<bool>;

    /// Cheap round-trip used by the readiness probe
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed store holding the connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn find_all_books(&self) -> AppResult<Vec<Book>> {
        books::list(&self.pool).await
    }

    async fn find_book(&self, id: i32) -> AppResult<Option<Book>> {
        books::get_by_id(&self.pool, id).await
    }

    async fn find_books_by_category(&self, category_id: i32) -> AppResult<Vec<Book>> {
        books::list_by_category(&self.pool, category_id).await
    }

    async fn find_category(&self, id: i32) -> AppResult<Option<Category>> {
        categories::get_by_id(&self.pool, id).await
    }

    async fn insert_book(&self, title: &str, author: &str, category: &Category) -> AppResult<Book> {
        books::create(&self.pool, title, author, category).await
    }

    async fn insert_book_with_new_category(
        &self,
        title: &str,
        author: &str,
        category_name: &str,
    ) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;
        let category = categories::create(&mut *tx, category_name).await?;
        let book = books::create(&mut *tx, title, author, &category).await?;
        tx.commit().await?;
        Ok(book)
    }

    async fn update_book(&self, book: &Book) -> AppResult<()> {
        books::update(&self.pool, book).await
    }

    async fn delete_book(&self, book: &Book) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;
        books::delete(&mut *tx, book.id).await?;

        let mut category_deleted = false;
        if let Some(category_id) = book.category_id {
            if books::count_by_category(&mut *tx, category_id).await? == 0 {
                category_deleted = categories::delete(&mut *tx, category_id).await?;
            }
        }

        tx.commit().await?;
        Ok(category_deleted)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
