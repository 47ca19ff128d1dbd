//! Categories queries

use sqlx::postgres::PgExecutor;

use crate::{error::AppResult, models::category::Category};

/// Get category by ID
pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(category)
}

/// Create a category; the id is assigned by the database
pub async fn create<'e>(executor: impl PgExecutor<'e>, name: &str) -> AppResult<Category> {
    let row = sqlx::query_as::<_, Category>(
        "INSERT INTO category (name) VALUES ($1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

/// Delete a category, returning whether a row was removed.
/// Books still referencing it make this fail on the FK.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: i32) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM category WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
