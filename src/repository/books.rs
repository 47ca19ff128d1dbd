//! Books queries
//!
//! Each function runs on any Postgres executor, so the same query serves a
//! pooled call or a step inside a transaction.

use sqlx::postgres::PgExecutor;

use crate::{
    error::AppResult,
    models::{book::Book, category::Category},
};

/// List all books
pub async fn list<'e>(executor: impl PgExecutor<'e>) -> AppResult<Vec<Book>> {
    let rows = sqlx::query_as::<_, Book>(
        "SELECT id, title, author, category_id FROM book ORDER BY id",
    )
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Get book by ID
pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<Option<Book>> {
    let book = sqlx::query_as::<_, Book>(
        "SELECT id, title, author, category_id FROM book WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(book)
}

/// List books referencing a category
pub async fn list_by_category<'e>(
    executor: impl PgExecutor<'e>,
    category_id: i32,
) -> AppResult<Vec<Book>> {
    let rows = sqlx::query_as::<_, Book>(
        "SELECT id, title, author, category_id FROM book WHERE category_id = $1 ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Count books referencing a category
pub async fn count_by_category<'e>(
    executor: impl PgExecutor<'e>,
    category_id: i32,
) -> AppResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*)::bigint FROM book WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(executor)
            .await?;
    Ok(count)
}

/// Create a book attached to an existing category
pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    title: &str,
    author: &str,
    category: &Category,
) -> AppResult<Book> {
    let row = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO book (title, author, category_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, author, category_id
        "#,
    )
    .bind(title)
    .bind(author)
    .bind(category.id)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

/// Persist title, author and category of a book
pub async fn update<'e>(executor: impl PgExecutor<'e>, book: &Book) -> AppResult<()> {
    sqlx::query("UPDATE book SET title = $1, author = $2, category_id = $3 WHERE id = $4")
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.category_id)
        .bind(book.id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Delete a book
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<()> {
    sqlx::query("DELETE FROM book WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}
